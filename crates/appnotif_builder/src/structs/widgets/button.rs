use url::Url;

use crate::{Arguments, BuilderError, ToXML, XmlPolicy};

/// Visual style hint of a button
///
/// Only honoured by the shell when the toast opts into button styles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonStyle {
  #[default]
  Default,
  Success,
  Critical,
}

impl ButtonStyle {
  fn hint(&self) -> Option<&'static str> {
    match self {
      ButtonStyle::Default => None,
      ButtonStyle::Success => Some(r#" hint-buttonStyle="success""#),
      ButtonStyle::Critical => Some(r#" hint-buttonStyle="critical""#),
    }
  }
}

/// A toast button, rendered as an `<action />` element
///
/// Learn More Here
/// <https://learn.microsoft.com/en-us/uwp/schemas/tiles/toastschema/element-action>
#[derive(Debug, Clone)]
pub struct Button {
  content: String,
  arguments: Arguments,
  icon_uri: Option<Url>,
  protocol_uri: Option<Url>,
  tool_tip: String,
  input_id: String,
  use_context_menu_placement: bool,
  button_style: ButtonStyle,
}

impl Button {
  pub fn new<T: Into<String>>(content: T) -> Self {
    Self {
      content: content.into(),
      arguments: Arguments::new(),
      icon_uri: None,
      protocol_uri: None,
      tool_tip: String::new(),
      input_id: String::new(),
      use_context_menu_placement: false,
      button_style: ButtonStyle::Default,
    }
  }

  /// Adds `key` with `value`; an existing key keeps its position
  pub fn add_argument<K: Into<String>, V: Into<String>>(mut self, key: K, value: V) -> Self {
    self.arguments.insert(key, value);
    self
  }

  pub fn set_icon_uri(mut self, icon_uri: Url) -> Self {
    self.icon_uri = Some(icon_uri);
    self
  }

  pub fn try_set_icon_uri(self, icon_uri: &str) -> Result<Self, BuilderError> {
    Ok(self.set_icon_uri(Url::parse(icon_uri)?))
  }

  /// Activates the target app through its protocol instead of the foreground app
  pub fn use_protocol_activation(mut self, protocol_uri: Url) -> Self {
    self.protocol_uri = Some(protocol_uri);
    self
  }

  pub fn try_use_protocol_activation(self, protocol_uri: &str) -> Result<Self, BuilderError> {
    Ok(self.use_protocol_activation(Url::parse(protocol_uri)?))
  }

  pub fn set_tool_tip<T: Into<String>>(mut self, tool_tip: T) -> Self {
    self.tool_tip = tool_tip.into();
    self
  }

  /// Provide input id to place the button near an input
  pub fn set_input_id<T: Into<String>>(mut self, input_id: T) -> Self {
    self.input_id = input_id.into();
    self
  }

  pub fn use_context_menu_placement(mut self) -> Self {
    self.use_context_menu_placement = true;
    self
  }

  pub fn set_button_style(mut self, button_style: ButtonStyle) -> Self {
    self.button_style = button_style;
    self
  }

  pub fn content(&self) -> &str {
    &self.content
  }

  pub fn arguments(&self) -> &Arguments {
    &self.arguments
  }

  pub fn icon_uri(&self) -> Option<&Url> {
    self.icon_uri.as_ref()
  }

  pub fn protocol_uri(&self) -> Option<&Url> {
    self.protocol_uri.as_ref()
  }

  pub fn tool_tip(&self) -> &str {
    &self.tool_tip
  }

  pub fn input_id(&self) -> &str {
    &self.input_id
  }

  pub fn is_context_menu_placement(&self) -> bool {
    self.use_context_menu_placement
  }

  pub fn button_style(&self) -> ButtonStyle {
    self.button_style
  }

  /// The `<action />` element with values written verbatim
  pub fn get_xml(&self) -> String {
    self.to_xml()
  }
}

impl ToXML for Button {
  fn to_xml_with(&self, policy: XmlPolicy) -> String {
    let mut xml = format!(
      "<action content={} arguments={}",
      policy.attr(&self.content),
      policy.attr(&self.arguments.concat())
    );

    if self.use_context_menu_placement {
      xml.push_str(r#" placement="contextMenu""#);
    }

    if let Some(uri) = &self.icon_uri {
      xml.push_str(&format!(" imageUri={}", policy.attr(uri.as_str())));
    }

    if let Some(uri) = &self.protocol_uri {
      xml.push_str(&format!(
        r#" activationType="protocol" protocolActivationTargetApplicationPfn={}"#,
        policy.attr(uri.as_str())
      ));
    }

    if !self.input_id.is_empty() {
      xml.push_str(&format!(" hint-inputId={}", policy.attr(&self.input_id)));
    }

    if let Some(hint) = self.button_style.hint() {
      xml.push_str(hint);
    }

    if !self.tool_tip.is_empty() {
      xml.push_str(&format!(" hint-toolTip={}", policy.attr(&self.tool_tip)));
    }

    xml.push_str(" />");

    tracing::trace!(
      target: "appnotif::builder",
      content = %self.content,
      arguments = self.arguments.len(),
      ?policy,
      "Rendered button"
    );

    xml
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::xml::check_well_formed;

  #[test]
  fn test_accept_button() {
    let xml = Button::new("Accept")
      .add_argument("action", "accept")
      .set_input_id("reply")
      .get_xml();

    assert_eq!(
      xml,
      "<action content=Accept arguments=action&accept; hint-inputId=reply />"
    );
  }

  #[test]
  fn test_content_leads_attributes() {
    for content in ["Snooze", "", "a b", "<&>"] {
      let xml = Button::new(content).get_xml();
      assert!(xml.starts_with(&format!("<action content={content} arguments=")));
    }
  }

  #[test]
  fn test_bare_button() {
    assert_eq!(Button::new("Ok").get_xml(), "<action content=Ok arguments= />");
  }

  #[test]
  fn test_argument_last_value_wins_first_position_kept() {
    let xml = Button::new("Reply")
      .add_argument("action", "reply")
      .add_argument("conversation", "42")
      .add_argument("action", "send")
      .get_xml();

    assert_eq!(
      xml,
      "<action content=Reply arguments=action&send;conversation&42; />"
    );
  }

  #[test]
  fn test_tool_tip_present_only_when_set() {
    let with = Button::new("Ok").set_tool_tip("Close it").get_xml();
    assert!(with.contains("hint-toolTip=Close it"));

    let without = Button::new("Ok").set_tool_tip("").get_xml();
    assert!(!without.contains("hint-toolTip"));
  }

  #[test]
  fn test_context_menu_placement() {
    let with = Button::new("Mute").use_context_menu_placement().get_xml();
    assert!(with.contains(r#"placement="contextMenu""#));

    let without = Button::new("Mute").get_xml();
    assert!(!without.contains("placement="));
  }

  #[test]
  fn test_button_styles() {
    let success = Button::new("Yes")
      .set_button_style(ButtonStyle::Success)
      .get_xml();
    assert!(success.contains(r#"hint-buttonStyle="success""#));

    let critical = Button::new("No")
      .set_button_style(ButtonStyle::Critical)
      .get_xml();
    assert!(critical.contains(r#"hint-buttonStyle="critical""#));
    assert!(!critical.contains("success"));

    let default = Button::new("Maybe")
      .set_button_style(ButtonStyle::Default)
      .get_xml();
    assert!(!default.contains("hint-buttonStyle"));
  }

  #[test]
  fn test_full_attribute_order() {
    let xml = Button::new("Open")
      .set_tool_tip("tip")
      .set_button_style(ButtonStyle::Success)
      .set_input_id("box")
      .use_protocol_activation(Url::parse("https://contoso.com/open").unwrap())
      .set_icon_uri(Url::parse("https://contoso.com/icon.png").unwrap())
      .use_context_menu_placement()
      .add_argument("k", "v")
      .get_xml();

    assert_eq!(
      xml,
      concat!(
        "<action content=Open arguments=k&v;",
        r#" placement="contextMenu""#,
        " imageUri=https://contoso.com/icon.png",
        r#" activationType="protocol" protocolActivationTargetApplicationPfn=https://contoso.com/open"#,
        " hint-inputId=box",
        r#" hint-buttonStyle="success""#,
        " hint-toolTip=tip",
        " />"
      )
    );
  }

  #[test]
  fn test_get_xml_is_idempotent() {
    let button = Button::new("Call")
      .add_argument("a", "b")
      .set_tool_tip("t");

    assert_eq!(button.get_xml(), button.get_xml());
  }

  #[test]
  fn test_setters_after_render_affect_output() {
    let button = Button::new("Call");
    let before = button.get_xml();
    let after = button.set_input_id("x").get_xml();
    assert_ne!(before, after);
  }

  #[test]
  fn test_last_write_wins() {
    let button = Button::new("Call")
      .set_input_id("first")
      .set_input_id("second")
      .set_button_style(ButtonStyle::Critical)
      .set_button_style(ButtonStyle::Success);

    assert_eq!(button.input_id(), "second");
    assert_eq!(button.button_style(), ButtonStyle::Success);
  }

  #[test]
  fn test_try_set_icon_uri() {
    let button = Button::new("Icon")
      .try_set_icon_uri("https://contoso.com/a.png")
      .unwrap();
    assert_eq!(button.icon_uri().map(Url::as_str), Some("https://contoso.com/a.png"));

    let err = Button::new("Icon").try_set_icon_uri("not a uri").unwrap_err();
    assert!(matches!(err, BuilderError::InvalidUri(_)));

    assert!(Button::new("Go")
      .try_use_protocol_activation("::")
      .is_err());
  }

  #[test]
  fn test_verbatim_does_not_escape() {
    let xml = Button::new("a\"b").set_tool_tip("<x>").get_xml();
    assert!(xml.contains("content=a\"b"));
    assert!(xml.contains("hint-toolTip=<x>"));
  }

  #[test]
  fn test_escaped_is_well_formed() {
    let button = Button::new("Tom & \"Jerry\"")
      .add_argument("q", "<1>")
      .set_tool_tip("it's")
      .set_button_style(ButtonStyle::Critical);

    let xml = button.to_xml_with(XmlPolicy::Escaped);
    assert!(xml.starts_with(r#"<action content="Tom &amp; &quot;Jerry&quot;" arguments="q&amp;&lt;1&gt;;""#));
    assert!(check_well_formed(&xml).is_ok());
  }
}
