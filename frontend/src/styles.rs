pub const CONTAINER: &str = "min-h-screen bg-gray-950 text-white w-full";
pub const PAGE: &str = "max-w-3xl mx-auto px-4 pb-24";
pub const NAV: &str = "fixed top-0 z-50 w-full bg-gray-900/70 backdrop-blur-md border-b border-gray-700/50";
pub const NAV_INNER: &str = "w-full h-16 px-4 flex items-center justify-between";
pub const NAV_LINK: &str = "flex items-center gap-1 px-3 py-2 text-sm font-medium text-gray-300 hover:text-blue-400 transition-colors duration-200";
pub const BALANCE_PILL: &str = "flex items-center gap-1 px-3 py-1 rounded-full bg-gray-800 text-sm font-semibold";
pub const CARD: &str = "bg-gray-900 rounded-2xl shadow-lg p-4 sm:p-6 border border-gray-800";
pub const TEXT_H1: &str = "text-2xl font-bold text-white text-center mb-4";
pub const TEXT_SMALL: &str = "text-sm text-gray-400";
pub const BUTTON_PRIMARY: &str = "inline-flex items-center justify-center px-4 py-3 rounded-xl font-semibold text-white bg-gradient-to-r from-blue-600 to-blue-700 hover:from-blue-700 hover:to-blue-800 transition-all duration-300";
pub const BUTTON_SECONDARY: &str = "inline-flex items-center justify-center px-4 py-3 rounded-xl font-medium border border-gray-600 text-white hover:bg-gray-800";
pub const BUTTON_DISABLED: &str = "inline-flex items-center justify-center px-4 py-3 rounded-xl font-semibold text-white bg-gray-600 opacity-75 cursor-not-allowed";
pub const CHIP: &str = "px-3 py-1 rounded-lg text-sm font-medium transition-colors";
pub const CHIP_ACTIVE: &str = "bg-blue-500 text-white";
pub const CHIP_IDLE: &str = "bg-gray-800 text-gray-300";
pub const TOAST: &str = "fixed bottom-6 left-1/2 -translate-x-1/2 z-50 px-4 py-3 rounded-xl bg-red-600/90 text-white text-sm shadow-lg";
pub const MODAL_BACKDROP: &str = "fixed inset-0 z-40 flex items-center justify-center bg-black/70 p-4";
pub const MODAL: &str = "w-full max-w-sm bg-gray-900 rounded-2xl p-6 border border-gray-700 text-center space-y-4";
