use super::options::DisplayOptions;
use crate::channel::Payload;
use eframe::egui;
use std::fmt::Write as _;

/// Format a payload the way the panel shows it: two-space indented JSON.
///
/// No payload yields an empty string. Anything that cannot be rendered yields
/// a visible placeholder instead of an error.
pub fn format_payload(payload: Option<&Payload>) -> String {
    match payload {
        None => String::new(),
        Some(Payload::Value(value)) => match serde_json::to_string_pretty(value) {
            Ok(text) => text,
            Err(e) => placeholder(&e.to_string()),
        },
        Some(Payload::Unformattable(reason)) => placeholder(reason),
    }
}

fn placeholder(reason: &str) -> String {
    format!("<unformattable payload: {reason}>")
}

/// Right-aligned, 1-based line numbers for `text`, one per line.
pub fn line_gutter(text: &str) -> String {
    let count = text.lines().count().max(1);
    let width = count.to_string().len();
    let mut out = String::with_capacity(count * (width + 1));
    for n in 1..=count {
        if n > 1 {
            out.push('\n');
        }
        let _ = write!(out, "{n:>width$}");
    }
    out
}

/// Text the display region renders for the current payload and options.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DisplayText {
    pub gutter: Option<String>,
    pub body: String,
}

impl DisplayText {
    pub fn new(body: &str, options: &DisplayOptions) -> Self {
        let gutter = if options.show_line_numbers && !body.is_empty() {
            Some(line_gutter(body))
        } else {
            None
        };
        Self {
            gutter,
            body: body.to_owned(),
        }
    }
}

/// Formatted payload text, recomputed only when a new payload arrives.
#[derive(Debug, Default)]
pub(crate) struct TextCache {
    generation: Option<u64>,
    text: String,
}

impl TextCache {
    pub(crate) fn get(&mut self, generation: u64, payload: Option<&Payload>) -> &str {
        if self.generation != Some(generation) {
            self.text = format_payload(payload);
            self.generation = Some(generation);
        }
        &self.text
    }
}

/// Paint the text region: optional gutter followed by the highlighted body.
pub(crate) fn text_region_ui(ui: &mut egui::Ui, text: &DisplayText, options: &DisplayOptions) {
    let theme = options.theme.code_theme(ui.style());
    let mut job = egui_extras::syntax_highlighting::highlight(
        ui.ctx(),
        &theme,
        &text.body,
        options.language.syntax_token(),
    );
    job.wrap.max_width = if options.wrap_long_lines {
        ui.available_width()
    } else {
        f32::INFINITY
    };

    ui.horizontal_top(|ui| {
        if let Some(gutter) = &text.gutter {
            ui.add(
                egui::Label::new(
                    egui::RichText::new(gutter)
                        .monospace()
                        .color(ui.visuals().weak_text_color()),
                )
                .wrap(false),
            );
            ui.separator();
        }
        ui.add(egui::Label::new(job).wrap(options.wrap_long_lines));
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gutter_pads_to_widest_number() {
        let text = (0..12).map(|i| i.to_string()).collect::<Vec<_>>().join("\n");
        let gutter = line_gutter(&text);
        let lines: Vec<&str> = gutter.lines().collect();
        assert_eq!(lines.len(), 12);
        assert_eq!(lines[0], " 1");
        assert_eq!(lines[11], "12");
    }

    #[test]
    fn cache_reformats_only_on_new_generation() {
        let mut cache = TextCache::default();
        let first = Payload::Value(serde_json::json!({"a": 1}));
        assert_eq!(cache.get(1, Some(&first)), "{\n  \"a\": 1\n}");
        let second = Payload::Value(serde_json::json!({"b": 2}));
        // same generation: stale value kept on purpose
        assert_eq!(cache.get(1, Some(&second)), "{\n  \"a\": 1\n}");
        assert_eq!(cache.get(2, Some(&second)), "{\n  \"b\": 2\n}");
    }
}
