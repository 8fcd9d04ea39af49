//! Page widgets around the canvas

use game_core::{Display, HistoryRecord, MatchSettings};
use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, HtmlButtonElement, HtmlElement, HtmlInputElement, HtmlSelectElement, Window,
};

/// Look up an element by id and cast it to the expected type
pub fn element<T: JsCast>(document: &Document, id: &str) -> Result<T, String> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| format!("Missing element #{id}"))?
        .dyn_into::<T>()
        .map_err(|_| format!("Element #{id} has an unexpected type"))
}

/// Difficulty select and player name input of the match page
#[derive(Clone)]
pub struct SettingsForm {
    difficulty: HtmlSelectElement,
    player_name: HtmlInputElement,
}

impl SettingsForm {
    pub fn new(document: &Document) -> Result<Self, String> {
        Ok(Self {
            difficulty: element(document, "difficulty")?,
            player_name: element(document, "player-name")?,
        })
    }

    pub fn read(&self) -> MatchSettings {
        MatchSettings::from_inputs(&self.difficulty.value(), &self.player_name.value())
    }
}

/// Controls that exist only on the match page
struct MatchWidgets {
    form: SettingsForm,
    start: HtmlButtonElement,
    stop: HtmlButtonElement,
    timer: Element,
    history: HtmlElement,
    history_list: Element,
}

pub struct DomDisplay {
    window: Window,
    document: Document,
    left_score: Element,
    right_score: Element,
    widgets: Option<MatchWidgets>,
}

impl DomDisplay {
    /// Scoreboard only
    pub fn endless(window: Window, document: Document) -> Result<Self, String> {
        Ok(Self {
            left_score: element(&document, "left-score")?,
            right_score: element(&document, "right-score")?,
            widgets: None,
            window,
            document,
        })
    }

    /// Scoreboard plus settings, buttons, timer and history
    pub fn match_page(window: Window, document: Document) -> Result<Self, String> {
        let widgets = MatchWidgets {
            form: SettingsForm::new(&document)?,
            start: element(&document, "start-btn")?,
            stop: element(&document, "stop-btn")?,
            timer: element(&document, "timer")?,
            history: element(&document, "history")?,
            history_list: element(&document, "history-list")?,
        };
        // Nothing to stop until a match starts
        widgets.stop.set_disabled(true);

        Ok(Self {
            widgets: Some(widgets),
            ..Self::endless(window, document)?
        })
    }

    fn render_history_list(&self, list: &Element, records: &[HistoryRecord]) -> Result<(), String> {
        list.set_text_content(None);
        for record in records {
            let item = self
                .document
                .create_element("li")
                .map_err(|e| format!("Failed to create list item: {:?}", e))?;
            item.set_text_content(Some(&record.line()));
            list.append_child(&item)
                .map_err(|e| format!("Failed to append list item: {:?}", e))?;
        }
        Ok(())
    }
}

impl Display for DomDisplay {
    fn set_scores(&mut self, left: u32, right: u32) {
        self.left_score.set_text_content(Some(&left.to_string()));
        self.right_score.set_text_content(Some(&right.to_string()));
    }

    fn set_elapsed(&mut self, formatted: &str) {
        if let Some(widgets) = &self.widgets {
            widgets.timer.set_text_content(Some(formatted));
        }
    }

    fn render_history(&mut self, records: &[HistoryRecord]) {
        let Some(widgets) = &self.widgets else {
            return;
        };
        widgets.history.set_hidden(records.is_empty());
        if let Err(e) = self.render_history_list(&widgets.history_list, records) {
            log::error!("{e}");
        }
    }

    fn set_inputs_enabled(&mut self, enabled: bool) {
        if let Some(widgets) = &self.widgets {
            widgets.form.difficulty.set_disabled(!enabled);
            widgets.form.player_name.set_disabled(!enabled);
            widgets.start.set_disabled(!enabled);
            widgets.stop.set_disabled(enabled);
        }
    }

    fn show_summary(&mut self, record: &HistoryRecord) {
        if let Err(e) = self.window.alert_with_message(&record.summary()) {
            log::warn!("Summary alert failed: {:?}", e);
        }
    }
}
