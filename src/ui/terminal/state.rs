//! Shell state
//!
//! All mutable UI state lives here and changes only through [`ShellState::apply`].
//! The calculators in `crate::core` stay pure; this module decides when to
//! call them and what to keep on screen.

use std::fmt;
use std::str::FromStr;

use crate::config::Config;
use crate::core::aspect::{self, RatioPreset};
use crate::core::contrast::{self, ContrastOutcome};
use crate::core::typography::{self, ScaleAnchor, ScaleStep};

/// Longest text a single input accepts.
const MAX_INPUT_LEN: usize = 16;

/// Value given to newly added foreground rows.
pub const NEW_ROW_COLOR: &str = "#FFFFFF";

/// Tools in navigation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToolId {
    Aspect,
    Contrast,
    Typography,
}

impl ToolId {
    pub const ALL: [ToolId; 3] = [ToolId::Aspect, ToolId::Contrast, ToolId::Typography];

    pub fn title(&self) -> &'static str {
        match self {
            ToolId::Aspect => "Aspect Ratio",
            ToolId::Contrast => "Contrast Finder",
            ToolId::Typography => "Typography Scale",
        }
    }

    pub fn index(&self) -> usize {
        match self {
            ToolId::Aspect => 0,
            ToolId::Contrast => 1,
            ToolId::Typography => 2,
        }
    }

    pub fn next(&self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(&self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl fmt::Display for ToolId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

impl FromStr for ToolId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "aspect" => Ok(ToolId::Aspect),
            "contrast" => Ok(ToolId::Contrast),
            "typography" | "type-scale" => Ok(ToolId::Typography),
            other => Err(format!("unknown tool '{}' (use aspect, contrast or typography)", other)),
        }
    }
}

/// A single text-field edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextEdit {
    Insert(char),
    Backspace,
    Clear,
}

impl TextEdit {
    /// Apply to `text`, returning whether it changed.
    ///
    /// `accept` sees the current text and the character to insert.
    fn apply(self, text: &mut String, accept: impl Fn(&str, char) -> bool) -> bool {
        match self {
            TextEdit::Insert(c) => {
                if !accept(text, c) || text.chars().count() >= MAX_INPUT_LEN {
                    return false;
                }
                text.push(c);
                true
            }
            TextEdit::Backspace => text.pop().is_some(),
            TextEdit::Clear => {
                let changed = !text.is_empty();
                text.clear();
                changed
            }
        }
    }
}

/// Digits and at most one decimal point.
fn accepts_number_char(text: &str, c: char) -> bool {
    c.is_ascii_digit() || (c == '.' && !text.contains('.'))
}

/// Discrete user intents, produced by the input mapper.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellAction {
    Quit,
    NextTool,
    PrevTool,
    SelectTool(ToolId),
    Edit(TextEdit),
    Up,
    Down,
    Left,
    Right,
    AddRow,
    RemoveRow,
    Copy,
    /// The debounce timer fired; rescore the current rows
    Recompute,
    None,
}

/// Work the event loop has to do after an action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    ScheduleRecompute,
    Copy(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AspectField {
    Width,
    Height,
}

#[derive(Debug, Clone)]
pub struct AspectState {
    pub presets: Vec<RatioPreset>,
    pub preset_index: usize,
    pub width: String,
    pub height: String,
    pub focus: AspectField,
}

impl AspectState {
    pub fn new(initial: RatioPreset) -> Self {
        let mut presets = RatioPreset::ALL.to_vec();
        let preset_index = match initial.position() {
            Some(index) => index,
            None => {
                // a configured ratio that is not a stock button goes before Custom
                let index = presets.len() - 1;
                presets.insert(index, initial);
                index
            }
        };

        Self {
            presets,
            preset_index,
            width: String::new(),
            height: String::new(),
            focus: AspectField::Width,
        }
    }

    pub fn preset(&self) -> RatioPreset {
        self.presets[self.preset_index]
    }

    pub fn cycle_preset(&mut self, forward: bool) {
        let len = self.presets.len();
        self.preset_index = if forward {
            (self.preset_index + 1) % len
        } else {
            (self.preset_index + len - 1) % len
        };

        if self.preset() == RatioPreset::Custom {
            self.width.clear();
            self.height.clear();
        } else if !self.width.is_empty() {
            self.recompute_from(AspectField::Width);
        } else if !self.height.is_empty() {
            self.recompute_from(AspectField::Height);
        }
    }

    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            AspectField::Width => AspectField::Height,
            AspectField::Height => AspectField::Width,
        };
    }

    pub fn edit(&mut self, edit: TextEdit) -> bool {
        let focus = self.focus;
        let field = match focus {
            AspectField::Width => &mut self.width,
            AspectField::Height => &mut self.height,
        };
        let changed = edit.apply(field, accepts_number_char);
        if changed {
            self.recompute_from(focus);
        }
        changed
    }

    pub fn focused_value(&self) -> &str {
        match self.focus {
            AspectField::Width => &self.width,
            AspectField::Height => &self.height,
        }
    }

    /// Derive the other field from `source`; invalid input leaves it untouched.
    fn recompute_from(&mut self, source: AspectField) {
        let Some(ratio) = self.preset().ratio() else {
            return;
        };

        match source {
            AspectField::Width => {
                if let Some(height) = self.width.parse::<f64>().ok().and_then(|w| ratio.height_for_width(w)) {
                    self.height = aspect::format_dimension(height);
                }
            }
            AspectField::Height => {
                if let Some(width) = self.height.parse::<f64>().ok().and_then(|h| ratio.width_for_height(h)) {
                    self.width = aspect::format_dimension(width);
                }
            }
        }
    }
}

#[derive(Debug, Clone)]
pub struct ContrastState {
    pub rows: Vec<String>,
    pub selected: usize,
    pub outcome: ContrastOutcome,
    /// Rows changed since the last scoring
    pub stale: bool,
}

impl ContrastState {
    pub fn new(initial: Vec<String>) -> Self {
        let rows = if initial.is_empty() {
            vec![NEW_ROW_COLOR.to_string()]
        } else {
            initial.into_iter().map(|row| row.trim().to_uppercase()).collect()
        };
        let outcome = contrast::score(&rows);

        Self { rows, selected: 0, outcome, stale: false }
    }

    pub fn add_row(&mut self) {
        self.rows.push(NEW_ROW_COLOR.to_string());
        self.selected = self.rows.len() - 1;
        self.stale = true;
    }

    /// Remove the selected row, always keeping at least one.
    pub fn remove_selected(&mut self) -> bool {
        if self.rows.len() <= 1 {
            return false;
        }
        self.rows.remove(self.selected);
        self.selected = self.selected.min(self.rows.len() - 1);
        self.stale = true;
        true
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn select_next(&mut self) {
        self.selected = (self.selected + 1).min(self.rows.len() - 1);
    }

    pub fn edit(&mut self, edit: TextEdit) -> bool {
        let changed = edit.apply(&mut self.rows[self.selected], |_, c| !c.is_control());
        if changed {
            self.stale = true;
        }
        changed
    }

    /// Score the rows as they are right now.
    pub fn recompute(&mut self) {
        self.outcome = contrast::score(&self.rows);
        self.stale = false;
    }
}

#[derive(Debug, Clone)]
pub struct TypographyState {
    pub base: String,
    pub anchor: ScaleAnchor,
    pub scale: Option<Vec<ScaleStep>>,
    pub selected: usize,
}

impl TypographyState {
    pub fn new(base: f64, anchor: ScaleAnchor) -> Self {
        let mut state = Self {
            base: aspect::format_dimension(base),
            anchor,
            scale: None,
            selected: 0,
        };
        state.recompute();
        state
    }

    pub fn cycle_anchor(&mut self, forward: bool) {
        let all = ScaleAnchor::ALL;
        let index = all.iter().position(|a| *a == self.anchor).unwrap_or(0);
        let next = if forward {
            (index + 1) % all.len()
        } else {
            (index + all.len() - 1) % all.len()
        };
        self.anchor = all[next];
        self.recompute();
    }

    pub fn edit(&mut self, edit: TextEdit) -> bool {
        let changed = edit.apply(&mut self.base, accepts_number_char);
        if changed {
            self.recompute();
        }
        changed
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn select_next(&mut self) {
        self.selected = (self.selected + 1).min(typography::SCALE_LABELS.len() - 1);
    }

    pub fn selected_step(&self) -> Option<&ScaleStep> {
        self.scale.as_ref().and_then(|scale| scale.get(self.selected))
    }

    fn recompute(&mut self) {
        self.scale = self
            .base
            .parse::<f64>()
            .ok()
            .and_then(|base| typography::type_scale(base, self.anchor));
    }
}

/// Everything the shell shows.
#[derive(Debug, Clone)]
pub struct ShellState {
    pub active: ToolId,
    pub aspect: AspectState,
    pub contrast: ContrastState,
    pub typography: TypographyState,
    pub status: Option<String>,
    pub should_quit: bool,
}

impl ShellState {
    pub fn new(config: &Config, active: ToolId, foregrounds: Vec<String>) -> Self {
        // validated when the config was built
        let preset = RatioPreset::parse(&config.default_aspect_ratio)
            .unwrap_or(RatioPreset::ALL[0]);

        Self {
            active,
            aspect: AspectState::new(preset),
            contrast: ContrastState::new(foregrounds),
            typography: TypographyState::new(config.base_font_size, config.scale_anchor),
            status: None,
            should_quit: false,
        }
    }

    pub fn set_status<S: Into<String>>(&mut self, status: S) {
        self.status = Some(status.into());
    }

    pub fn apply(&mut self, action: ShellAction) -> Effect {
        match action {
            ShellAction::Quit => {
                self.should_quit = true;
                Effect::None
            }
            ShellAction::NextTool => {
                self.active = self.active.next();
                Effect::None
            }
            ShellAction::PrevTool => {
                self.active = self.active.prev();
                Effect::None
            }
            ShellAction::SelectTool(tool) => {
                self.active = tool;
                Effect::None
            }
            ShellAction::Recompute => {
                self.contrast.recompute();
                Effect::None
            }
            ShellAction::Copy => self.copy_target().map(Effect::Copy).unwrap_or_else(|| {
                self.set_status("Nothing to copy");
                Effect::None
            }),
            ShellAction::None => Effect::None,
            other => match self.active {
                ToolId::Aspect => self.apply_aspect(other),
                ToolId::Contrast => self.apply_contrast(other),
                ToolId::Typography => self.apply_typography(other),
            },
        }
    }

    fn apply_aspect(&mut self, action: ShellAction) -> Effect {
        match action {
            ShellAction::Edit(edit) => {
                self.aspect.edit(edit);
            }
            ShellAction::Up | ShellAction::Down => self.aspect.toggle_focus(),
            ShellAction::Left => self.aspect.cycle_preset(false),
            ShellAction::Right => self.aspect.cycle_preset(true),
            _ => {}
        }
        Effect::None
    }

    fn apply_contrast(&mut self, action: ShellAction) -> Effect {
        let changed = match action {
            ShellAction::Edit(edit) => self.contrast.edit(edit),
            ShellAction::AddRow => {
                self.contrast.add_row();
                true
            }
            ShellAction::RemoveRow => self.contrast.remove_selected(),
            ShellAction::Up => {
                self.contrast.select_prev();
                false
            }
            ShellAction::Down => {
                self.contrast.select_next();
                false
            }
            _ => false,
        };

        if changed {
            Effect::ScheduleRecompute
        } else {
            Effect::None
        }
    }

    fn apply_typography(&mut self, action: ShellAction) -> Effect {
        match action {
            ShellAction::Edit(edit) => {
                self.typography.edit(edit);
            }
            ShellAction::Left => self.typography.cycle_anchor(false),
            ShellAction::Right => self.typography.cycle_anchor(true),
            ShellAction::Up => self.typography.select_prev(),
            ShellAction::Down => self.typography.select_next(),
            _ => {}
        }
        Effect::None
    }

    /// The value the active tool's copy button would copy.
    fn copy_target(&self) -> Option<String> {
        let value = match self.active {
            ToolId::Aspect => self.aspect.focused_value().to_string(),
            ToolId::Contrast => self.contrast.outcome.best()?.background_color.to_hex(),
            ToolId::Typography => self.typography.selected_step()?.css_value(),
        };
        (!value.trim().is_empty()).then_some(value)
    }
}
