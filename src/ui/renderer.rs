use crate::ui::app_component::AppComponent;
use crate::ui::core::{actions::Action, EventHandler, EventType};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::info;
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use std::io;

/// Take over the terminal and run the app until the user quits
pub async fn run_app(mut app: AppComponent) -> anyhow::Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut event_handler = EventHandler::new();
    app.start();

    let result = run_app_loop(&mut terminal, &mut app, &mut event_handler).await;

    // Restore terminal even when the loop failed
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    info!("Exiting");
    result
}

async fn run_app_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut AppComponent,
    event_handler: &mut EventHandler,
) -> anyhow::Result<()> {
    let mut needs_render = true;

    loop {
        if needs_render && event_handler.should_render() {
            terminal.draw(|f| {
                let area = f.area();
                app.render(f, area);
            })?;
            event_handler.mark_rendered();
            needs_render = false;
        }

        let event = event_handler.next_event().await?;
        match event {
            EventType::Key(_) | EventType::Resize(_, _) => {
                app.handle_event(event).await?;
                needs_render = true;
            }
            EventType::Tick => {
                for action in app.process_background_actions() {
                    if matches!(app.dispatch(action), Action::Quit) {
                        return Ok(());
                    }
                    needs_render = true;
                }
            }
            EventType::Other => {}
        }

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}
