use proc_macro2::TokenStream;
use quote::{ToTokens, quote};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct ParamDoc {
  name: String,
  text: String,
}

/// Doc text of a generated item: free lines followed by one entry per
/// documented argument.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Documentation {
  lines: Vec<String>,
  params: Vec<ParamDoc>,
}

impl Documentation {
  #[must_use]
  pub fn from_raw(input: &str) -> Self {
    Self {
      lines: input.replace("\\n", "\n").lines().map(|l| l.trim_end().to_string()).collect(),
      params: vec![],
    }
  }

  /// Blank or missing descriptions produce empty documentation.
  #[must_use]
  pub fn from_optional(desc: Option<&String>) -> Self {
    desc
      .filter(|d| !d.trim().is_empty())
      .map_or_else(Self::default, |d| Self::from_raw(d))
  }

  #[must_use]
  pub fn from_lines(lines: impl IntoIterator<Item = impl Into<String>>) -> Self {
    Self {
      lines: lines.into_iter().map(Into::into).collect(),
      params: vec![],
    }
  }

  #[must_use]
  pub fn lines(&self) -> &[String] {
    &self.lines
  }

  #[cfg(test)]
  pub fn param(&self, name: &str) -> Option<&str> {
    self.params.iter().find(|p| p.name == name).map(|p| p.text.as_str())
  }

  pub fn push(&mut self, line: impl Into<String>) {
    self.lines.push(line.into());
  }

  pub fn add_param(&mut self, name: impl Into<String>, text: impl Into<String>) {
    self.params.push(ParamDoc {
      name: name.into(),
      text: text.into(),
    });
  }

  /// Rendered doc lines, with arguments listed under an `# Arguments` heading.
  pub fn render_lines(&self) -> Vec<String> {
    let mut out = self.lines.clone();
    if self.params.is_empty() {
      return out;
    }

    if !out.is_empty() {
      out.push(String::new());
    }
    out.push("# Arguments".to_string());
    out.push(String::new());
    for param in &self.params {
      if param.text.is_empty() {
        out.push(format!("* `{}`", param.name));
      } else {
        let mut text_lines = param.text.lines();
        let first = text_lines.next().unwrap_or_default();
        out.push(format!("* `{}` - {first}", param.name));
        out.extend(text_lines.map(|l| format!("  {l}")));
      }
    }
    out
  }
}

impl ToTokens for Documentation {
  fn to_tokens(&self, tokens: &mut TokenStream) {
    let doc_lines = self.render_lines().into_iter().map(|line| {
      let line = format!(" {line}");
      quote! { #[doc = #line] }
    });
    quote! { #(#doc_lines)* }.to_tokens(tokens);
  }
}
