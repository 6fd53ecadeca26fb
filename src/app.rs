use crate::{cli, config, ctrl, data, editor, tui, util};

pub struct App {
    settings: config::Settings,
    _logger_handle: flexi_logger::LoggerHandle,

    term: tui::Term,
    commander: ctrl::Commander,
    editor: editor::Editor,
}

impl App {
    pub fn create(cli_options: &cli::Options) -> util::Result<App> {
        let settings = config::Settings::load(cli_options)?;

        let logger_handle = flexi_logger::Logger::try_with_str(&settings.log_level)?
            .log_to_file(flexi_logger::FileSpec::default().o_directory(settings.log_dir.clone()))
            .start()?;
        log::info!("Starting arbor");

        let forest = load_forest(&settings)?;
        log::info!("Forest has {} nodes", data::node::count(&forest));

        let app = App {
            settings,
            _logger_handle: logger_handle,
            term: tui::Term::new()?,
            commander: ctrl::Commander::new(),
            editor: editor::Editor::new(forest),
        };

        Ok(app)
    }

    pub fn run(&mut self) -> util::Result<()> {
        'mainloop: loop {
            self.term
                .process_events(self.settings.mainloop_timeout_ms, |event| {
                    self.commander.process(event)
                })?;

            for command in self.commander.commands() {
                log::trace!("command: {:?}", &command);
                if self.editor.apply(command) == editor::Flow::Quit {
                    break 'mainloop;
                }
            }

            self.draw()?;
        }

        log::info!("Stopping App.run()");

        Ok(())
    }

    // Redraws the complete layout. Performing a term.clear()? results in flicker
    fn draw(&mut self) -> util::Result<()> {
        let rows = self.editor.rows();
        let focus = self.editor.focus().row();
        let is_input_mode = matches!(self.editor.mode(), ctrl::Mode::Input);

        let layout = tui::Layout::create(&self.term)?;

        tui::Text::new(layout.title).draw(
            &mut self.term,
            format!("Tree View ({} nodes)", data::node::count(self.editor.store().forest())),
        )?;

        tui::Tree::new(layout.tree).draw(&mut self.term, &rows, focus)?;

        let input = match self.editor.focused_key() {
            Some(key) => format!("{key} + child: {}", self.editor.pending()),
            None => String::new(),
        };
        tui::Text::new(layout.input)
            .set_mark(is_input_mode)
            .draw(&mut self.term, input)?;

        tui::status::Line::new(layout.status)
            .draw(&mut self.term, &mut self.editor.status_line)?;

        self.term.flush()?;

        Ok(())
    }
}

pub fn load_forest(settings: &config::Settings) -> util::Result<data::Forest> {
    match &settings.seed {
        Some(fp) => data::seed::from_path(fp),
        None => Ok(data::seed::builtin()),
    }
}
