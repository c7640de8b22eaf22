use crate::{
  xml::check_well_formed, BuilderError, Button, Text, ToXML, XmlPolicy,
};

/// Windows renders at most this many buttons on a toast
pub const MAX_BUTTONS: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Scenario {
  #[default]
  Default,
  Reminder,
  Alarm,
  IncomingCall,
  Urgent,
}

impl Scenario {
  fn attribute(&self) -> &'static str {
    match self {
      Scenario::Default => "",
      Scenario::Reminder => r#" scenario="reminder""#,
      Scenario::Alarm => r#" scenario="alarm""#,
      Scenario::IncomingCall => r#" scenario="incomingCall""#,
      Scenario::Urgent => r#" scenario="urgent""#,
    }
  }
}

/// The way to build a full toast payload out of texts and buttons
#[derive(Debug, Clone, Default)]
pub struct ToastContent {
  texts: Vec<Text>,
  buttons: Vec<Button>,
  scenario: Scenario,
  policy: XmlPolicy,
}

impl ToastContent {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn add_text(mut self, text: Text) -> Self {
    self.texts.push(text);
    self
  }

  pub fn add_button(mut self, button: Button) -> Self {
    self.buttons.push(button);
    self
  }

  pub fn set_scenario(mut self, scenario: Scenario) -> Self {
    self.scenario = scenario;
    self
  }

  pub fn set_policy(mut self, policy: XmlPolicy) -> Self {
    self.policy = policy;
    self
  }

  pub fn texts(&self) -> &[Text] {
    &self.texts
  }

  pub fn buttons(&self) -> &[Button] {
    &self.buttons
  }

  pub fn policy(&self) -> XmlPolicy {
    self.policy
  }

  /// Renders with the policy chosen through [`ToastContent::set_policy`]
  pub fn to_xml(&self) -> String {
    self.to_xml_with(self.policy)
  }

  /// Checks the button limit, and well-formedness of escaped payloads.
  ///
  /// Verbatim payloads carry unquoted attributes and are never well-formed XML,
  /// so they are only checked for the button limit.
  pub fn validate(&self) -> Result<(), BuilderError> {
    if self.buttons.len() > MAX_BUTTONS {
      return Err(BuilderError::TooManyButtons {
        count: self.buttons.len(),
        max: MAX_BUTTONS,
      });
    }

    if self.policy == XmlPolicy::Escaped {
      check_well_formed(&self.to_xml())?;
    }

    tracing::debug!(
      target: "appnotif::builder",
      texts = self.texts.len(),
      buttons = self.buttons.len(),
      "Toast payload validated"
    );

    Ok(())
  }
}

impl ToXML for ToastContent {
  fn to_xml_with(&self, policy: XmlPolicy) -> String {
    let visual: String = self.texts.iter().map(|x| x.to_xml_with(policy)).collect();

    let actions = if self.buttons.is_empty() {
      String::new()
    } else {
      let buttons: String = self.buttons.iter().map(|x| x.to_xml_with(policy)).collect();
      format!("<actions>{buttons}</actions>")
    };

    format!(
      r#"<toast{scenario}><visual><binding template="ToastGeneric">{visual}</binding></visual>{actions}</toast>"#,
      scenario = self.scenario.attribute(),
    )
  }

  fn to_xml(&self) -> String {
    self.to_xml_with(self.policy)
  }
}
