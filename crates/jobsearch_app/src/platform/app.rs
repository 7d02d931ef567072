use std::ops::ControlFlow;
use std::sync::mpsc;
use std::thread;

use anyhow::{anyhow, bail, Context};
use jobsearch_core::{update, AppState, Msg, SearchStatus};
use rustyline::error::ReadlineError;
use rustyline::{DefaultEditor, ExternalPrinter};
use search_logging::{search_error, search_info, search_warn};

use super::cli::Cli;
use super::config::AppConfig;
use super::effects::EffectRunner;
use super::ui::constants::PROMPT;
use super::ui::input::{parse_command, UiCommand};
use super::{logging, persistence, ui};

/// Everything the event loop reacts to.
pub enum AppEvent {
    Msg(Msg),
    /// The line editor is up. Output goes through its printer from now on so
    /// the prompt is redrawn below each page.
    InputReady(Option<Box<dyn ExternalPrinter + Send>>),
    Input(String),
    InputClosed,
}

pub fn run_app(cli: Cli) -> anyhow::Result<()> {
    if cli.no_color {
        colored::control::set_override(false);
    }

    let mut config = AppConfig::load(cli.config.as_deref()).context("loading configuration")?;
    config.apply_cli(&cli);
    logging::initialize(config.log_destination, &config.log_level);
    let selection = config.selection()?;

    let saved_store = persistence::open_saved_store(&config.state_dir, cli.ephemeral);
    let saved = persistence::load_saved_jobs(&saved_store);

    let (event_tx, event_rx) = mpsc::channel();
    let effects = EffectRunner::new(config.search_settings(), saved_store, event_tx.clone());
    let mut app = App::new(AppState::with_selection(selection), effects);
    app.dispatch(Msg::SavedRestored(saved));
    app.dispatch(Msg::Started);

    if cli.once {
        return app.run_once(&event_rx);
    }

    spawn_input_thread(event_tx);
    app.run_interactive(&event_rx)
}

fn spawn_input_thread(event_tx: mpsc::Sender<AppEvent>) {
    thread::spawn(move || {
        let mut editor = match DefaultEditor::new() {
            Ok(editor) => editor,
            Err(err) => {
                search_error!("Failed to open line editor: {}", err);
                let _ = event_tx.send(AppEvent::InputClosed);
                return;
            }
        };
        let printer = match editor.create_external_printer() {
            Ok(printer) => Some(Box::new(printer) as Box<dyn ExternalPrinter + Send>),
            Err(err) => {
                search_warn!("No external printer, writing to stdout: {}", err);
                None
            }
        };
        if event_tx.send(AppEvent::InputReady(printer)).is_err() {
            return;
        }
        loop {
            match editor.readline(PROMPT) {
                Ok(line) => {
                    if !line.trim().is_empty() {
                        let _ = editor.add_history_entry(line.as_str());
                    }
                    if event_tx.send(AppEvent::Input(line)).is_err() {
                        break;
                    }
                }
                Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => {
                    let _ = event_tx.send(AppEvent::InputClosed);
                    break;
                }
                Err(err) => {
                    search_error!("Input error: {}", err);
                    let _ = event_tx.send(AppEvent::InputClosed);
                    break;
                }
            }
        }
    });
}

/// Where pages and messages are written: stdout until the line editor hands
/// over its printer.
#[derive(Default)]
struct Console {
    printer: Option<Box<dyn ExternalPrinter + Send>>,
}

impl Console {
    fn print_lines(&mut self, lines: Vec<String>) {
        if let Some(printer) = self.printer.as_mut() {
            let mut text = lines.join("\n");
            text.push('\n');
            match printer.print(text) {
                Ok(()) => return,
                Err(err) => {
                    search_warn!("Line editor printer failed, using stdout: {}", err);
                    self.printer = None;
                }
            }
        }
        for line in lines {
            println!("{line}");
        }
    }

    fn print(&mut self, line: impl Into<String>) {
        self.print_lines(vec![line.into()]);
    }
}

pub(crate) struct App {
    state: AppState,
    effects: EffectRunner,
    console: Console,
    input_ready: bool,
}

impl App {
    pub(crate) fn new(state: AppState, effects: EffectRunner) -> Self {
        Self {
            state,
            effects,
            console: Console::default(),
            input_ready: false,
        }
    }

    pub(crate) fn dispatch(&mut self, msg: Msg) {
        let state = std::mem::take(&mut self.state);
        let (state, effects) = update(state, msg);
        self.state = state;
        self.effects.run(effects);
    }

    fn run_interactive(mut self, event_rx: &mpsc::Receiver<AppEvent>) -> anyhow::Result<()> {
        while let Ok(event) = event_rx.recv() {
            if self.handle_event(event).is_break() {
                break;
            }
        }
        search_info!("Leaving job search");
        Ok(())
    }

    /// Nothing is rendered until the line editor is ready.
    pub(crate) fn handle_event(&mut self, event: AppEvent) -> ControlFlow<()> {
        match event {
            AppEvent::Msg(msg) => self.dispatch(msg),
            AppEvent::InputReady(printer) => {
                self.console.printer = printer;
                self.input_ready = true;
                self.console.print_lines(ui::render::help());
            }
            AppEvent::Input(line) => {
                if self.handle_input(&line).is_break() {
                    return ControlFlow::Break(());
                }
            }
            AppEvent::InputClosed => return ControlFlow::Break(()),
        }
        if self.input_ready {
            self.render_if_dirty();
        }
        ControlFlow::Continue(())
    }

    fn run_once(mut self, event_rx: &mpsc::Receiver<AppEvent>) -> anyhow::Result<()> {
        self.settle(event_rx)?;
        self.console.print_lines(ui::render::render(&self.state.view()));
        match self.state.current_status() {
            Some(SearchStatus::Failure(message)) => Err(anyhow!("search failed: {message}")),
            _ => Ok(()),
        }
    }

    /// Processes engine messages until the current selection is no longer pending.
    pub(crate) fn settle(&mut self, event_rx: &mpsc::Receiver<AppEvent>) -> anyhow::Result<()> {
        while matches!(
            self.state.current_status(),
            None | Some(SearchStatus::Pending { .. })
        ) {
            match event_rx.recv() {
                Ok(AppEvent::Msg(msg)) => self.dispatch(msg),
                Ok(AppEvent::InputReady(_)) | Ok(AppEvent::Input(_)) => {}
                Ok(AppEvent::InputClosed) | Err(_) => bail!("search engine stopped"),
            }
        }
        self.state.consume_dirty();
        Ok(())
    }

    fn render_if_dirty(&mut self) {
        if self.state.consume_dirty() {
            self.console.print_lines(ui::render::render(&self.state.view()));
        }
    }

    pub(crate) fn handle_input(&mut self, line: &str) -> ControlFlow<()> {
        let command = match parse_command(line) {
            Ok(Some(command)) => command,
            Ok(None) => return ControlFlow::Continue(()),
            Err(message) => {
                self.console.print(message);
                return ControlFlow::Continue(());
            }
        };

        match command {
            UiCommand::SelectRole(role) => self.dispatch(Msg::RoleSelected(role)),
            UiCommand::SelectLocation(location) => self.dispatch(Msg::LocationSelected(location)),
            UiCommand::ToggleSave(number) => {
                match self.state.current_jobs().get(number - 1).cloned() {
                    Some(job) => self.dispatch(Msg::SaveToggled(job)),
                    None => self
                        .console
                        .print(format!("No job #{number} in the current results")),
                }
            }
            UiCommand::Retry => self.dispatch(Msg::RetryRequested),
            UiCommand::Show => {
                let page = ui::render::render(&self.state.view());
                self.console.print_lines(page);
            }
            UiCommand::ListRoles => {
                let options = ui::render::role_options(self.state.selection().role);
                self.console.print_lines(options);
            }
            UiCommand::ListLocations => {
                let options = ui::render::location_options(self.state.selection().location);
                self.console.print_lines(options);
            }
            UiCommand::Help => self.console.print_lines(ui::render::help()),
            UiCommand::Quit => return ControlFlow::Break(()),
        }
        ControlFlow::Continue(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};
    use std::time::Duration;

    use jobsearch_core::{JobRecord, Location, ResultsView, SearchKey};
    use jobsearch_engine::{
        EngineHandle, FailureKind, KeyValueStore, MemoryKeyValueStore, SavedJobsStore,
        SearchClient, SearchError, SAVED_JOBS_KEY,
    };

    use super::*;
    use crate::platform::ui::constants::HELP_LINES;

    /// Collects whatever the app hands to the line editor.
    struct CapturePrinter(Arc<Mutex<Vec<String>>>);

    impl ExternalPrinter for CapturePrinter {
        fn print(&mut self, msg: String) -> rustyline::Result<()> {
            self.0.lock().unwrap().push(msg);
            Ok(())
        }
    }

    /// Seattle answers quickly, Remote slowly, United States fails.
    struct ScriptedClient;

    #[async_trait::async_trait]
    impl SearchClient for ScriptedClient {
        async fn search(&self, key: &SearchKey) -> Result<Vec<JobRecord>, SearchError> {
            match key.location.as_str() {
                "Seattle" => Ok(vec![
                    JobRecord::new("Software Engineer", "Acme"),
                    JobRecord::new("Software Engineer", "Globex"),
                    JobRecord::new("Software Engineer", "Initech"),
                ]),
                "Remote" => {
                    tokio::time::sleep(Duration::from_millis(300)).await;
                    Ok(vec![JobRecord::new("Remote Engineer", "Hooli")])
                }
                _ => Err(SearchError::new(
                    FailureKind::HttpStatus(500),
                    "500 Internal Server Error",
                )),
            }
        }
    }

    fn app_with(memory: MemoryKeyValueStore) -> (App, mpsc::Receiver<AppEvent>) {
        colored::control::set_override(false);
        let (event_tx, event_rx) = mpsc::channel();
        let engine = EngineHandle::with_client(Arc::new(ScriptedClient));
        let store = SavedJobsStore::new(Box::new(memory) as Box<dyn KeyValueStore>);
        let effects = EffectRunner::with_engine(engine, store, event_tx);
        (App::new(AppState::new(), effects), event_rx)
    }

    fn companies(app: &App) -> Vec<String> {
        match app.state.view().results {
            ResultsView::Loaded { available, .. } => {
                available.into_iter().map(|card| card.company).collect()
            }
            other => panic!("expected loaded results, got {other:?}"),
        }
    }

    #[test]
    fn server_error_renders_error_without_cards() {
        let (mut app, event_rx) = app_with(MemoryKeyValueStore::new());
        app.dispatch(Msg::LocationSelected(Location::UnitedStates));
        app.settle(&event_rx).unwrap();

        let lines = ui::render::render(&app.state.view());
        assert!(lines.iter().any(|line| line.contains("Error")));
        assert!(!lines.iter().any(|line| line.contains("Logo:")));
    }

    #[test]
    fn saving_writes_through_to_the_store() {
        let memory = MemoryKeyValueStore::new();
        let (mut app, event_rx) = app_with(memory.clone());
        app.dispatch(Msg::Started);
        app.settle(&event_rx).unwrap();
        assert_eq!(companies(&app), vec!["Acme", "Globex", "Initech"]);

        assert!(app.handle_input("save 2").is_continue());
        assert_eq!(
            memory.get(SAVED_JOBS_KEY).unwrap().as_deref(),
            Some(r#"["Software Engineer-Globex"]"#)
        );

        assert!(app.handle_input("save 2").is_continue());
        assert_eq!(memory.get(SAVED_JOBS_KEY).unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn save_of_unknown_card_changes_nothing() {
        let memory = MemoryKeyValueStore::new();
        let (mut app, event_rx) = app_with(memory.clone());
        app.dispatch(Msg::Started);
        app.settle(&event_rx).unwrap();

        assert!(app.handle_input("save 9").is_continue());
        assert!(app.state.saved().is_empty());
        assert_eq!(memory.get(SAVED_JOBS_KEY).unwrap(), None);
    }

    #[test]
    fn late_response_for_superseded_selection_is_not_shown() {
        let (mut app, event_rx) = app_with(MemoryKeyValueStore::new());
        app.dispatch(Msg::Started);
        app.settle(&event_rx).unwrap();

        // Remote is slow; Seattle comes back from the cache immediately.
        assert!(app.handle_input("location remote").is_continue());
        assert!(app.handle_input("location seattle").is_continue());
        assert_eq!(companies(&app), vec!["Acme", "Globex", "Initech"]);

        match event_rx.recv_timeout(Duration::from_secs(5)) {
            Ok(AppEvent::Msg(msg)) => app.dispatch(msg),
            _ => panic!("expected the remote completion"),
        }
        assert_eq!(companies(&app), vec!["Acme", "Globex", "Initech"]);
    }

    #[test]
    fn quit_breaks_the_loop() {
        let (mut app, _event_rx) = app_with(MemoryKeyValueStore::new());
        assert!(app.handle_input("quit").is_break());
        assert!(app.handle_input("nonsense").is_continue());
    }

    #[test]
    fn pages_wait_for_the_line_editor_and_go_through_its_printer() {
        let (mut app, event_rx) = app_with(MemoryKeyValueStore::new());
        app.dispatch(Msg::Started);
        match event_rx.recv_timeout(Duration::from_secs(5)) {
            Ok(event) => assert!(app.handle_event(event).is_continue()),
            Err(_) => panic!("expected the Seattle completion"),
        }

        let printed = Arc::new(Mutex::new(Vec::new()));
        let printer = CapturePrinter(Arc::clone(&printed));
        let ready = AppEvent::InputReady(Some(Box::new(printer)));
        assert!(app.handle_event(ready).is_continue());
        assert!(app.handle_input("save 9").is_continue());
        assert!(app.handle_event(AppEvent::InputClosed).is_break());

        let printed = printed.lock().unwrap();
        assert_eq!(printed.len(), 3);
        assert!(printed[0].starts_with(HELP_LINES[0]));
        assert!(printed[1].contains("Initech"));
        assert!(printed.iter().all(|text| text.ends_with('\n')));
        assert_eq!(printed[2], "No job #9 in the current results\n");
    }
}
