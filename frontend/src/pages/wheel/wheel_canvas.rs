use std::f64::consts::PI;

use shared::spin_wheel::segment_angle;
use shared::PrizeItem;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};
use yew::prelude::*;

const SEGMENT_COLORS: [&str; 6] = ["#f97316", "#06b6d4", "#8b5cf6", "#ec4899", "#22c55e", "#eab308"];
const WIN_COLOR: &str = "#facc15";
const STAKE_COLOR: &str = "#374151";
const LABEL_MAX_CHARS: usize = 12;
const FONT: &str = "bold 16px 'Segoe UI', Roboto, system-ui, sans-serif";
const COMPACT_FONT: &str = "bold 13px 'Segoe UI', Roboto, system-ui, sans-serif";

#[derive(Properties, PartialEq)]
pub struct WheelCanvasProps {
    pub segments: Vec<PrizeItem>,
    /// Clockwise rotation in degrees.
    pub rotation: f64,
    pub is_spinning: bool,
    /// Paint segment 0 as the prize and the rest as the stake (upgrade wheel).
    #[prop_or_default]
    pub highlight_first: bool,
    /// Smaller labels for narrow screens.
    #[prop_or_default]
    pub compact: bool,
}

fn context_2d(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .ok()
        .flatten()
        .and_then(|ctx| ctx.dyn_into::<CanvasRenderingContext2d>().ok())
}

fn segment_color(index: usize, highlight_first: bool) -> &'static str {
    match (highlight_first, index) {
        (true, 0) => WIN_COLOR,
        (true, _) => STAKE_COLOR,
        (false, i) => SEGMENT_COLORS[i % SEGMENT_COLORS.len()],
    }
}

fn label(item: &PrizeItem) -> String {
    let title = item.title();
    if title.chars().count() > LABEL_MAX_CHARS {
        let short: String = title.chars().take(LABEL_MAX_CHARS - 1).collect();
        format!("{}…", short)
    } else {
        title.to_string()
    }
}

fn draw_wheel(ctx: &CanvasRenderingContext2d, width: f64, height: f64, props: &WheelCanvasProps) {
    let center_x = width / 2.0;
    let center_y = height / 2.0;
    let radius = width.min(height) / 2.0 - 20.0;

    ctx.clear_rect(0.0, 0.0, width, height);

    // Glow
    ctx.begin_path();
    let glow = if props.is_spinning { 0.25 } else { 0.15 };
    ctx.set_fill_style_str(&format!("rgba(130, 100, 255, {})", glow));
    let _ = ctx.arc(center_x, center_y, radius + 15.0, 0.0, 2.0 * PI);
    ctx.fill();

    let n = props.segments.len();
    if n == 0 {
        ctx.begin_path();
        ctx.set_fill_style_str("#1a1c2e");
        let _ = ctx.arc(center_x, center_y, radius, 0.0, 2.0 * PI);
        ctx.fill();
        return;
    }

    let seg = segment_angle(n).to_radians();

    ctx.save();
    let _ = ctx.translate(center_x, center_y);
    // Canvas angles grow clockwise from 3 o'clock, same as the landing math.
    let _ = ctx.rotate(props.rotation.to_radians());

    // Segment i is centred on i * seg.
    for (i, item) in props.segments.iter().enumerate() {
        let mid = i as f64 * seg;
        ctx.begin_path();
        ctx.set_fill_style_str(segment_color(i, props.highlight_first));
        ctx.move_to(0.0, 0.0);
        let _ = ctx.arc(0.0, 0.0, radius, mid - seg / 2.0, mid + seg / 2.0);
        ctx.close_path();
        ctx.fill();

        ctx.set_stroke_style_str("rgba(255, 255, 255, 0.7)");
        ctx.set_line_width(2.5);
        ctx.stroke();

        // Labels run outward along each segment's centre line.
        ctx.save();
        let _ = ctx.rotate(mid);
        let _ = ctx.translate(radius * 0.62, 0.0);
        ctx.set_font(if props.compact { COMPACT_FONT } else { FONT });
        ctx.set_text_align("center");
        ctx.set_text_baseline("middle");
        ctx.set_fill_style_str("#ffffff");
        ctx.set_shadow_color("rgba(0, 0, 0, 0.6)");
        ctx.set_shadow_blur(3.0);
        let _ = ctx.fill_text(&label(item), 0.0, 0.0);
        ctx.restore();
    }
    ctx.restore();

    // Hub
    ctx.begin_path();
    ctx.set_fill_style_str("#2d3142");
    let _ = ctx.arc(center_x, center_y, radius * 0.2, 0.0, 2.0 * PI);
    ctx.fill();

    ctx.begin_path();
    ctx.set_stroke_style_str("rgba(180, 130, 255, 0.5)");
    ctx.set_line_width(4.0);
    let _ = ctx.arc(center_x, center_y, radius - 2.0, 0.0, 2.0 * PI);
    ctx.stroke();

    // Pointer at 12 o'clock, tip towards the centre.
    let pointer_width = 18.0;
    let pointer_height = 28.0;
    ctx.begin_path();
    ctx.move_to(center_x, center_y - radius + 8.0);
    ctx.line_to(center_x - pointer_width, center_y - radius - pointer_height);
    ctx.line_to(center_x + pointer_width, center_y - radius - pointer_height);
    ctx.close_path();
    ctx.set_fill_style_str(if props.is_spinning { "#ffd700" } else { "#f59e0b" });
    ctx.fill();
    ctx.set_stroke_style_str("#e69500");
    ctx.set_line_width(1.5);
    ctx.stroke();
}

#[function_component(WheelCanvas)]
pub fn wheel_canvas(props: &WheelCanvasProps) -> Html {
    let canvas_ref = use_node_ref();

    {
        let canvas_ref = canvas_ref.clone();
        let snapshot = WheelCanvasProps {
            segments: props.segments.clone(),
            rotation: props.rotation,
            is_spinning: props.is_spinning,
            highlight_first: props.highlight_first,
            compact: props.compact,
        };
        use_effect(move || {
            if let Some(canvas) = canvas_ref.cast::<HtmlCanvasElement>() {
                if let Some(ctx) = context_2d(&canvas) {
                    draw_wheel(&ctx, canvas.width() as f64, canvas.height() as f64, &snapshot);
                }
            }
            || ()
        });
    }

    html! {
        <div class="relative flex justify-center">
            <canvas
                ref={canvas_ref}
                width="450"
                height="450"
                class="w-full max-w-[450px] h-auto rounded-full shadow-lg"
                style={if props.is_spinning {
                    "filter: drop-shadow(0px 5px 20px rgba(130, 100, 255, 0.4));"
                } else {
                    "filter: drop-shadow(0px 5px 15px rgba(0, 0, 0, 0.2));"
                }}
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upgrade_colors_mark_target() {
        assert_eq!(segment_color(0, true), WIN_COLOR);
        assert_eq!(segment_color(3, true), STAKE_COLOR);
        assert_eq!(segment_color(7, false), SEGMENT_COLORS[1]);
    }

    #[test]
    fn test_long_labels_are_shortened() {
        let item = PrizeItem::new("Extraordinarily Long Gift", "x.png", 1.0);
        assert_eq!(label(&item).chars().count(), LABEL_MAX_CHARS);
        assert_eq!(label(&PrizeItem::new("Rose", "r.png", 1.0)), "Rose");
    }
}
