pub mod footer;
pub mod header;
pub mod help;
pub mod layout;
pub mod tabs;
pub mod theme;
pub mod widgets;

use ratatui::Frame;

use crate::app::App;
use tabs::Tab;

pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let app_layout = layout::compute_layout(area);

    header::render(
        frame,
        app_layout.header,
        app.current_tab,
        app.client.connected,
        app.client.last_error.as_deref(),
    );

    match app.current_tab {
        Tab::Monitor => tabs::monitor::render(frame, app_layout.body, app),
        Tab::Temperature => tabs::temperature::render(frame, app_layout.body, app),
        Tab::Advanced => tabs::advanced::render(frame, app_layout.body, app),
    }

    footer::render(
        frame,
        app_layout.footer,
        app.current_tab,
        app.client.poll_interval(),
    );

    if app.show_help {
        help::render(frame, area);
    }
}
