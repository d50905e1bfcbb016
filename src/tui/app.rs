use std::time::Instant;

use crate::assess::{assess, Assessment, CropEvaluation};
use crate::config::{Config, Lang};
use crate::land::soil::soil_index;
use crate::land::{
    LandConditions, PH_BOUNDS, RAINFALL_BOUNDS, SALINITY_BOUNDS, SOIL_TYPES, TEMPERATURE_BOUNDS,
};
use crate::tui::theme::ThemeColors;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Recommended,
    All,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    Help,
    Breakdown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Soil,
    Ph,
    Rainfall,
    Temperature,
    Salinity,
}

impl FormField {
    pub const ALL: [FormField; 5] = [
        FormField::Soil,
        FormField::Ph,
        FormField::Rainfall,
        FormField::Temperature,
        FormField::Salinity,
    ];

    fn position(self) -> usize {
        Self::ALL.iter().position(|f| *f == self).unwrap_or(0)
    }

    fn next(self) -> Self {
        Self::ALL[(self.position() + 1) % Self::ALL.len()]
    }

    fn previous(self) -> Self {
        Self::ALL[(self.position() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

pub struct App {
    pub conditions: LandConditions,
    pub soil_index: usize,
    pub assessment: Assessment,
    /// Form values `r` resets back to (built-ins merged with config).
    pub defaults: LandConditions,
    pub lang: Lang,
    pub theme: ThemeColors,
    pub focused: FormField,
    pub current_view: View,
    pub input_mode: InputMode,
    pub table_state: ratatui::widgets::TableState,
    pub flash_message: Option<(String, Instant)>,
    pub should_quit: bool,
}

impl App {
    pub fn new(config: &Config, theme: ThemeColors) -> Self {
        let conditions = config.initial_conditions();
        let assessment = assess(&conditions);
        Self {
            soil_index: soil_index(&conditions.soil).unwrap_or(0),
            defaults: conditions.clone(),
            conditions,
            assessment,
            lang: config.lang(),
            theme,
            focused: FormField::Soil,
            current_view: View::Recommended,
            input_mode: InputMode::Normal,
            table_state: ratatui::widgets::TableState::default(),
            flash_message: None,
            should_quit: false,
        }
    }

    pub fn visible_rows(&self) -> &[CropEvaluation] {
        match self.current_view {
            View::Recommended => &self.assessment.recommended,
            View::All => &self.assessment.all,
        }
    }

    fn reevaluate(&mut self) {
        self.assessment = assess(&self.conditions);
        self.clamp_selection();
    }

    fn clamp_selection(&mut self) {
        let len = self.visible_rows().len();
        match self.table_state.selected() {
            Some(_) if len == 0 => self.table_state.select(None),
            Some(i) if i >= len => self.table_state.select(Some(len - 1)),
            _ => {}
        }
    }

    pub fn next_field(&mut self) {
        self.focused = self.focused.next();
    }

    pub fn previous_field(&mut self) {
        self.focused = self.focused.previous();
    }

    /// Nudge the focused field. `direction` is -1 or +1; `coarse` uses the
    /// larger step. Numeric fields clamp at the slider bounds, the soil
    /// selector wraps.
    pub fn adjust(&mut self, direction: i64, coarse: bool) {
        match self.focused {
            FormField::Soil => {
                let len = SOIL_TYPES.len() as i64;
                let index = (self.soil_index as i64 + direction).rem_euclid(len);
                self.soil_index = index as usize;
                self.conditions.soil = SOIL_TYPES[self.soil_index].name.to_string();
            }
            FormField::Ph => {
                let step = if coarse { 0.5 } else { 0.1 };
                let next = self.conditions.ph + step * direction as f64;
                // Round to the slider granularity so repeated steps don't drift.
                self.conditions.ph =
                    ((next.clamp(PH_BOUNDS.0, PH_BOUNDS.1)) * 10.0).round() / 10.0;
            }
            FormField::Rainfall => {
                let step = if coarse { 100 } else { 10 };
                let next = self.conditions.rainfall as i64 + step * direction;
                self.conditions.rainfall =
                    next.clamp(RAINFALL_BOUNDS.0 as i64, RAINFALL_BOUNDS.1 as i64) as u32;
            }
            FormField::Temperature => {
                let step = if coarse { 5 } else { 1 };
                let next = self.conditions.temperature as i64 + step * direction;
                self.conditions.temperature =
                    next.clamp(TEMPERATURE_BOUNDS.0 as i64, TEMPERATURE_BOUNDS.1 as i64) as u32;
            }
            FormField::Salinity => {
                let step = if coarse { 0.5 } else { 0.1 };
                let next = self.conditions.salinity + step * direction as f64;
                self.conditions.salinity =
                    ((next.clamp(SALINITY_BOUNDS.0, SALINITY_BOUNDS.1)) * 10.0).round() / 10.0;
            }
        }
        self.reevaluate();
    }

    pub fn reset(&mut self) {
        self.conditions = self.defaults.clone();
        self.soil_index = soil_index(&self.conditions.soil).unwrap_or(0);
        self.reevaluate();
        let msg = match self.lang {
            Lang::Ar => "تمت إعادة القيم الافتراضية".to_string(),
            Lang::En => "Reset to defaults".to_string(),
        };
        self.show_flash(msg);
    }

    pub fn toggle_view(&mut self) {
        self.current_view = match self.current_view {
            View::Recommended => View::All,
            View::All => View::Recommended,
        };
        self.table_state.select(None);
        self.clamp_selection();
    }

    pub fn next_row(&mut self) {
        let len = self.visible_rows().len();
        if len == 0 {
            return;
        }
        let i = match self.table_state.selected() {
            Some(i) => {
                if i >= len - 1 {
                    0
                } else {
                    i + 1
                }
            }
            None => 0,
        };
        self.table_state.select(Some(i));
    }

    pub fn previous_row(&mut self) {
        let len = self.visible_rows().len();
        if len == 0 {
            return;
        }
        let i = match self.table_state.selected() {
            Some(i) => {
                if i == 0 {
                    len - 1
                } else {
                    i - 1
                }
            }
            None => 0,
        };
        self.table_state.select(Some(i));
    }

    pub fn selected_evaluation(&self) -> Option<&CropEvaluation> {
        self.table_state
            .selected()
            .and_then(|i| self.visible_rows().get(i))
    }

    pub fn show_breakdown(&mut self) {
        if self.visible_rows().is_empty() {
            return;
        }
        if self.table_state.selected().is_none() {
            self.table_state.select(Some(0));
        }
        self.input_mode = InputMode::Breakdown;
    }

    pub fn dismiss_breakdown(&mut self) {
        self.input_mode = InputMode::Normal;
    }

    pub fn show_help(&mut self) {
        self.input_mode = InputMode::Help;
    }

    pub fn dismiss_help(&mut self) {
        self.input_mode = InputMode::Normal;
    }

    pub fn show_flash(&mut self, msg: String) {
        self.flash_message = Some((msg, Instant::now()));
    }

    pub fn update_flash(&mut self) {
        if let Some((_, timestamp)) = self.flash_message {
            if timestamp.elapsed().as_secs() >= 3 {
                self.flash_message = None;
            }
        }
    }
}
