use crate::status::ProgressStatus;
use yew::prelude::*;

pub const CONTAINER_CLASS: &str = "progress";
pub const MIN_WIDTH: &str = "2em";
const STRIPED_CLASS: &str = "progress-bar-striped active";

#[derive(Properties, PartialEq, Clone, Debug)]
pub struct ProgressBarProps {
    /// Width of the bar in percent. Not clamped.
    pub progress_pct: f64,
    pub progress_message: AttrValue,
    pub status: ProgressStatus,
    #[prop_or(false)]
    pub active: bool,
}

/// Class list of the inner bar element.
pub fn bar_class(status: ProgressStatus, active: bool) -> String {
    let mut class = format!("progress-bar {}", status.css_class());
    if active {
        class.push(' ');
        class.push_str(STRIPED_CLASS);
    }
    class
}

/// Inline style of the inner bar element. The min-width keeps the bar visible near 0%.
pub fn bar_style(progress_pct: f64) -> String {
    format!("min-width: {}; width: {}%", MIN_WIDTH, progress_pct)
}

#[function_component(ProgressBar)]
pub fn progress_bar(props: &ProgressBarProps) -> Html {
    html! {
        <div class={CONTAINER_CLASS}>
            <div
                class={bar_class(props.status, props.active)}
                role="progressbar"
                style={bar_style(props.progress_pct)}
            >
                { props.progress_message.to_string() }
            </div>
        </div>
    }
}
