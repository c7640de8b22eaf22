//! JSON description of a notification and its conversion into builders.

use anyhow::{Context, Result};
use appnotif_builder::{Button, ButtonStyle, Scenario, Text, ToastContent, XmlPolicy};
use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScenarioSpec {
    #[default]
    Default,
    Reminder,
    Alarm,
    IncomingCall,
    Urgent,
}

impl From<ScenarioSpec> for Scenario {
    fn from(value: ScenarioSpec) -> Self {
        match value {
            ScenarioSpec::Default => Scenario::Default,
            ScenarioSpec::Reminder => Scenario::Reminder,
            ScenarioSpec::Alarm => Scenario::Alarm,
            ScenarioSpec::IncomingCall => Scenario::IncomingCall,
            ScenarioSpec::Urgent => Scenario::Urgent,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StyleSpec {
    #[default]
    Default,
    Success,
    Critical,
}

impl From<StyleSpec> for ButtonStyle {
    fn from(value: StyleSpec) -> Self {
        match value {
            StyleSpec::Default => ButtonStyle::Default,
            StyleSpec::Success => ButtonStyle::Success,
            StyleSpec::Critical => ButtonStyle::Critical,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct TextSpec {
    pub content: String,
    #[serde(default)]
    pub language: String,
    #[serde(default)]
    pub call_scenario_align: bool,
    #[serde(default)]
    pub attribution: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ButtonSpec {
    pub content: String,
    /// Ordered `[key, value]` pairs
    #[serde(default)]
    pub arguments: Vec<(String, String)>,
    pub icon_uri: Option<String>,
    pub protocol_uri: Option<String>,
    #[serde(default)]
    pub tool_tip: String,
    #[serde(default)]
    pub input_id: String,
    #[serde(default)]
    pub context_menu: bool,
    #[serde(default)]
    pub style: StyleSpec,
}

/// A whole notification as described in a JSON file
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct NotificationSpec {
    pub scenario: ScenarioSpec,
    pub texts: Vec<TextSpec>,
    pub buttons: Vec<ButtonSpec>,
}

impl TextSpec {
    pub fn build(&self) -> Text {
        let mut text = Text::new(&self.content).set_language(&self.language);
        if self.call_scenario_align {
            text = text.use_call_scenario_align();
        }
        if self.attribution {
            text = text.use_attribution_text();
        }
        text
    }
}

impl ButtonSpec {
    pub fn build(&self) -> Result<Button> {
        let mut button = self
            .arguments
            .iter()
            .fold(Button::new(&self.content), |button, (key, value)| {
                button.add_argument(key, value)
            })
            .set_tool_tip(&self.tool_tip)
            .set_input_id(&self.input_id)
            .set_button_style(self.style.into());

        if let Some(uri) = &self.icon_uri {
            button = button
                .try_set_icon_uri(uri)
                .with_context(|| format!("Invalid icon uri on button '{}'", self.content))?;
        }

        if let Some(uri) = &self.protocol_uri {
            button = button
                .try_use_protocol_activation(uri)
                .with_context(|| format!("Invalid protocol uri on button '{}'", self.content))?;
        }

        if self.context_menu {
            button = button.use_context_menu_placement();
        }

        Ok(button)
    }
}

impl NotificationSpec {
    pub fn from_json(content: &str) -> Result<Self> {
        serde_json::from_str(content).context("Failed to parse notification description")
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let spec = Self::from_json(&content)?;

        tracing::debug!(
            target: "render",
            path = %path.display(),
            texts = spec.texts.len(),
            buttons = spec.buttons.len(),
            "Loaded notification description"
        );

        Ok(spec)
    }

    pub fn build(&self, policy: XmlPolicy) -> Result<ToastContent> {
        let mut toast = ToastContent::new()
            .set_scenario(self.scenario.into())
            .set_policy(policy);

        for text in &self.texts {
            toast = toast.add_text(text.build());
        }

        for button in &self.buttons {
            toast = toast.add_button(button.build()?);
        }

        Ok(toast)
    }
}
