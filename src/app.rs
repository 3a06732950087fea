use crate::components::progress_bar::ProgressBar;
use crate::status::ProgressStatus;
use gloo::console::log;
use gloo::timers::callback::Interval;
use yew::prelude::*;

/// Delay between simulated job ticks.
const TICK_MS: u32 = 250;
/// Progress added per tick.
const STEP_PCT: f64 = 5.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum JobState {
    Idle,
    Running,
    Finished,
    Failed,
}

impl JobState {
    /// Status, animation flag and message shown for a job at `pct`.
    pub fn bar_props(self, pct: f64) -> (ProgressStatus, bool, String) {
        match self {
            JobState::Idle => (ProgressStatus::Primary, false, "Waiting".to_string()),
            JobState::Running => (ProgressStatus::Info, true, format!("Importing... {}%", pct)),
            JobState::Finished => (ProgressStatus::Success, false, "Done".to_string()),
            JobState::Failed => (ProgressStatus::Danger, false, format!("Failed at {}%", pct)),
        }
    }
}

pub struct App {
    job: JobState,
    progress: f64,
    ticker: Option<Interval>,
    logs: Vec<String>,
}

pub enum Msg {
    StartJob,
    Tick,
    FailJob,
}

impl Component for App {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            job: JobState::Idle,
            progress: 0.0,
            ticker: None,
            logs: vec!["Progress bar demo ready".to_string()],
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::StartJob => {
                if self.job == JobState::Running {
                    return false;
                }
                self.job = JobState::Running;
                self.progress = 0.0;

                let link = ctx.link().clone();
                self.ticker = Some(Interval::new(TICK_MS, move || {
                    link.send_message(Msg::Tick);
                }));
                log!("Job started");
                self.add_log("Job started".to_string());
                true
            },
            Msg::Tick => {
                if self.job != JobState::Running {
                    return false;
                }
                self.progress = (self.progress + STEP_PCT).min(100.0);
                if self.progress >= 100.0 {
                    // Dropping the handle cancels the interval
                    self.ticker = None;
                    self.job = JobState::Finished;
                    log!("Job finished");
                    self.add_log("Job finished".to_string());
                }
                true
            },
            Msg::FailJob => {
                if self.job != JobState::Running {
                    return false;
                }
                self.ticker = None;
                self.job = JobState::Failed;
                log!("Job failed at", self.progress);
                self.add_log(format!("Job failed at {}%", self.progress));
                true
            },
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let (status, active, message) = self.job.bar_props(self.progress);
        let running = self.job == JobState::Running;

        html! {
            <div class="app-container">
                <header>
                    <h1>{ "Progress Bar" }</h1>
                </header>

                <main>
                    <div class="panel">
                        <h2>{ "Statuses" }</h2>
                        {
                            for ProgressStatus::ALL.into_iter().map(|status| {
                                html! {
                                    <ProgressBar
                                        progress_pct={60.0}
                                        progress_message={status.to_string()}
                                        status={status}
                                        active=true
                                    />
                                }
                            })
                        }
                    </div>

                    <div class="panel">
                        <h2>{ "Job" }</h2>
                        <ProgressBar
                            progress_pct={self.progress}
                            progress_message={message}
                            status={status}
                            active={active}
                        />

                        <div class="button-container">
                            <button
                                onclick={ctx.link().callback(|_| Msg::StartJob)}
                                disabled={running}
                            >
                                { "Start" }
                            </button>
                            <button
                                onclick={ctx.link().callback(|_| Msg::FailJob)}
                                disabled={!running}
                            >
                                { "Fail" }
                            </button>
                        </div>

                        <h2>{ "Logs" }</h2>
                        <div class="logs-container">
                            {
                                for self.logs.iter().map(|log| {
                                    html! { <div class="log-entry">{ log }</div> }
                                })
                            }
                        </div>
                    </div>
                </main>
            </div>
        }
    }
}

impl App {
    fn add_log(&mut self, message: String) {
        let timestamp = js_sys::Date::new_0().to_locale_time_string("en-US");
        self.logs.push(format!("[{}] {}", timestamp, message));
    }
}
