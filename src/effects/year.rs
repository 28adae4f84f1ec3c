//! Footer year placeholders: every element whose id starts with `year`.

use web_sys::Document;

use crate::dom;
use crate::view::View;

pub fn stamp<V: View>(targets: &[V], year: u32) {
    let text = year.to_string();
    for t in targets {
        t.set_text(&text);
    }
}

pub fn install(doc: &Document) {
    let targets = dom::query_all(doc, "[id^=year]");
    if !targets.is_empty() {
        stamp(&targets, js_sys::Date::new_0().get_full_year());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::RecordingView;

    #[test]
    fn every_placeholder_gets_the_year() {
        let targets = [RecordingView::with_text("2020"), RecordingView::new()];
        stamp(&targets, 2026);
        assert!(targets.iter().all(|t| t.text() == "2026"));
    }
}
