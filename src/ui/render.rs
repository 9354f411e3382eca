//! Top-level draw: exactly one step view per session step.

use ratatui::Frame;

use crate::ui::app::App;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::{layout_regions, two_column};
use crate::ui::session::Step;
use crate::ui::views;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header_area, body, footer_area) = layout_regions(area);

    let header = Header::new();
    frame.render_widget(header.widget(app.session().step_label()), header_area);

    match &app.session().step {
        Step::Upload { .. } => {
            views::upload::render(frame, body, app.upload_form(), app.session());
        }
        Step::Skills { resume, skills } => {
            let (left, right) = two_column(body);
            views::skills::render(frame, left, &resume.filename, skills);
            views::job::render(frame, right, app.job_form(), app.session());
        }
        Step::Match { result, .. } => {
            views::results::render(frame, body, result);
        }
    }

    let footer = Footer::new();
    frame.render_widget(footer.widget(hints_for(app), footer_area), footer_area);
}

fn hints_for(app: &App) -> &'static str {
    match app.session().step {
        Step::Upload { .. } => " Enter: Select │ Ctrl+U: Upload │ Ctrl+Q: Quit",
        Step::Skills { .. } => {
            " Enter: Newline │ Ctrl+F: Find Match │ Ctrl+R: Start Over │ Ctrl+Q: Quit"
        }
        Step::Match { .. } => " Ctrl+R: Analyze Another Resume │ Ctrl+Q: Quit",
    }
}
