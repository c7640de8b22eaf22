use crate::{ToXML, XmlPolicy};

/// A line of toast text, rendered as a `<text>` element
///
/// Learn more here
/// <https://learn.microsoft.com/en-us/uwp/schemas/tiles/toastschema/element-text>
#[derive(Debug, Clone)]
pub struct Text {
  content: String,
  language: String,
  use_call_scenario_align: bool,
  use_attribution_text: bool,
}

impl Text {
  pub fn new<T: Into<String>>(content: T) -> Self {
    Self {
      content: content.into(),
      language: String::new(),
      use_call_scenario_align: false,
      use_attribution_text: false,
    }
  }

  /// BCP-47 tag such as `en-US`; empty means unset
  pub fn set_language<T: Into<String>>(mut self, language: T) -> Self {
    self.language = language.into();
    self
  }

  /// Only for IncomingCall scenarios
  pub fn use_call_scenario_align(mut self) -> Self {
    self.use_call_scenario_align = true;
    self
  }

  pub fn use_attribution_text(mut self) -> Self {
    self.use_attribution_text = true;
    self
  }

  pub fn content(&self) -> &str {
    &self.content
  }

  pub fn language(&self) -> &str {
    &self.language
  }

  pub fn is_call_scenario_align(&self) -> bool {
    self.use_call_scenario_align
  }

  pub fn is_attribution_text(&self) -> bool {
    self.use_attribution_text
  }

  pub fn get_xml(&self) -> String {
    self.to_xml()
  }
}

impl ToXML for Text {
  fn to_xml_with(&self, policy: XmlPolicy) -> String {
    let mut xml = String::from("<text");

    if !self.language.is_empty() {
      xml.push_str(&format!(" lang={}", policy.attr(&self.language)));
    }

    if self.use_call_scenario_align {
      xml.push_str(r#" hint-callScenarioCenterAlign="true""#);
    }

    if self.use_attribution_text {
      xml.push_str(r#" placement="attribution""#);
    }

    xml.push('>');
    xml.push_str(&policy.body(&self.content));
    xml.push_str("</text>");

    tracing::trace!(target: "appnotif::builder", content = %self.content, ?policy, "Rendered text");

    xml
  }
}
