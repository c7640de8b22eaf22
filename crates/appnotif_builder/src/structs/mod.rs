pub mod arguments;
pub mod toast;
pub mod widgets;
pub mod xml;

pub use arguments::Arguments;
pub use toast::{Scenario, ToastContent};
pub use widgets::{Button, ButtonStyle, Text};
pub use xml::XmlPolicy;

/// Anything that renders to a notification XML fragment
pub trait ToXML {
  fn to_xml_with(&self, policy: XmlPolicy) -> String;

  fn to_xml(&self) -> String {
    self.to_xml_with(XmlPolicy::Verbatim)
  }
}
