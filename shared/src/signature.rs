use serde::{Deserialize, Serialize};

use crate::escape::{escape_attribute, escape_html};

const TABLE_OPEN: &str = r#"<table cellpadding="0" cellspacing="0" border="0" style="font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;">"#;
const TITLE_SEPARATOR: &str = ", ";
const CONTACT_SEPARATOR: &str = " • ";

/// Form contents for one signature. A field counts as present only when it
/// is a non-empty string.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct SignatureData {
    pub name: String,
    pub title: String,
    pub company: String,
    pub phone: String,
    /// Handle without the leading `@`.
    pub twitter: String,
    pub website_url: String,
    pub logo_url: String,
}

impl SignatureData {
    pub fn has_required_fields(&self) -> bool {
        !self.name.trim().is_empty()
    }

    pub fn has_content(&self) -> bool {
        [
            &self.name,
            &self.title,
            &self.company,
            &self.phone,
            &self.twitter,
            &self.logo_url,
        ]
        .iter()
        .any(|field| !field.is_empty())
    }

    /// `"Title, Company"`, or whichever of the two is present.
    pub fn title_line(&self) -> String {
        join_present(&[self.title.as_str(), self.company.as_str()], TITLE_SEPARATOR)
    }

    /// `"555-1234 • @handle"`, or whichever of the two is present.
    pub fn contact_line(&self) -> String {
        let handle = if self.twitter.is_empty() {
            String::new()
        } else {
            format!("@{}", self.twitter)
        };
        join_present(&[self.phone.as_str(), handle.as_str()], CONTACT_SEPARATOR)
    }
}

fn join_present(parts: &[&str], separator: &str) -> String {
    parts
        .iter()
        .filter(|part| !part.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(separator)
}

/// Renders the signature as a table-based fragment with inline styles only,
/// which is what mail clients reliably keep on paste.
pub fn render_signature_html(data: &SignatureData) -> String {
    let mut html = String::from(TABLE_OPEN);

    if !data.logo_url.is_empty() {
        html.push_str(&logo_row(&data.logo_url, &data.website_url));
    }

    if !data.name.is_empty() {
        html.push_str(&format!(
            r#"
  <tr>
    <td>
      <strong style="font-size: 16px; color: #1a1a1a;">{}</strong>
    </td>
  </tr>"#,
            escape_html(&data.name)
        ));
    }

    let title_line = data.title_line();
    if !title_line.is_empty() {
        html.push_str(&format!(
            r#"
  <tr>
    <td style="font-size: 14px; color: #6b7280;">
      {}
    </td>
  </tr>"#,
            escape_html(&title_line)
        ));
    }

    let contact_line = data.contact_line();
    if !contact_line.is_empty() {
        html.push_str(&format!(
            r#"
  <tr>
    <td style="font-size: 14px; color: #6b7280; padding-top: 4px;">
      {}
    </td>
  </tr>"#,
            escape_html(&contact_line)
        ));
    }

    html.push_str("\n</table>");
    html
}

fn logo_row(logo_url: &str, website_url: &str) -> String {
    let img = format!(
        r#"<img src="{}" alt="Company Logo" width="60" height="60" style="border-radius: 8px; display: block;">"#,
        escape_attribute(logo_url)
    );

    if website_url.is_empty() {
        format!(
            r#"
  <tr>
    <td style="padding-bottom: 12px;">
      {img}
    </td>
  </tr>"#
        )
    } else {
        format!(
            r#"
  <tr>
    <td style="padding-bottom: 12px;">
      <a href="{}" style="text-decoration: none;">
        {img}
      </a>
    </td>
  </tr>"#,
            escape_attribute(website_url)
        )
    }
}

/// Plain-text rendition used as the `text/plain` clipboard fallback.
pub fn render_signature_text(data: &SignatureData) -> String {
    [
        data.name.clone(),
        data.title_line(),
        data.contact_line(),
        data.website_url.clone(),
    ]
    .into_iter()
    .filter(|line| !line.is_empty())
    .collect::<Vec<_>>()
    .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full() -> SignatureData {
        SignatureData {
            name: "Jane Doe".into(),
            title: "Engineer".into(),
            company: "Acme".into(),
            phone: "555-1234".into(),
            twitter: "jdoe".into(),
            website_url: "http://x.com".into(),
            logo_url: "http://x/l.png".into(),
        }
    }

    /// Text content of the single `<td>` whose style matches.
    fn cell_text<'a>(html: &'a str, style: &str) -> Option<&'a str> {
        let open = format!(r#"<td style="{style}">"#);
        let start = html.find(&open)? + open.len();
        let end = html[start..].find("</td>")? + start;
        Some(html[start..end].trim())
    }

    const TITLE_STYLE: &str = "font-size: 14px; color: #6b7280;";
    const CONTACT_STYLE: &str = "font-size: 14px; color: #6b7280; padding-top: 4px;";

    #[test]
    fn empty_record_renders_bare_table() {
        let html = render_signature_html(&SignatureData::default());
        assert_eq!(html, format!("{TABLE_OPEN}\n</table>"));
        assert!(!html.contains("<tr>"));
    }

    #[test]
    fn rows_appear_in_fixed_order() {
        let html = render_signature_html(&full());
        let logo = html.find("<img").unwrap();
        let name = html.find("Jane Doe").unwrap();
        let title = html.find("Engineer, Acme").unwrap();
        let contact = html.find("555-1234").unwrap();
        assert!(logo < name && name < title && title < contact);
        assert_eq!(html.matches("<tr>").count(), 4);
    }

    #[test]
    fn title_and_company_join() {
        let html = render_signature_html(&full());
        assert_eq!(cell_text(&html, TITLE_STYLE), Some("Engineer, Acme"));

        let data = SignatureData {
            company: String::new(),
            ..full()
        };
        let html = render_signature_html(&data);
        assert_eq!(cell_text(&html, TITLE_STYLE), Some("Engineer"));

        let data = SignatureData {
            title: String::new(),
            ..full()
        };
        assert_eq!(data.title_line(), "Acme");
    }

    #[test]
    fn title_row_omitted_without_title_or_company() {
        let data = SignatureData {
            title: String::new(),
            company: String::new(),
            ..full()
        };
        let html = render_signature_html(&data);
        assert_eq!(cell_text(&html, TITLE_STYLE), None);
    }

    #[test]
    fn contact_join() {
        let html = render_signature_html(&full());
        assert_eq!(cell_text(&html, CONTACT_STYLE), Some("555-1234 • @jdoe"));

        let data = SignatureData {
            phone: String::new(),
            ..full()
        };
        let html = render_signature_html(&data);
        assert_eq!(cell_text(&html, CONTACT_STYLE), Some("@jdoe"));

        let data = SignatureData {
            twitter: String::new(),
            ..full()
        };
        assert_eq!(data.contact_line(), "555-1234");
    }

    #[test]
    fn twitter_is_always_prefixed() {
        let data = SignatureData {
            phone: String::new(),
            twitter: "@jdoe".into(),
            ..Default::default()
        };
        assert_eq!(data.contact_line(), "@@jdoe");
    }

    #[test]
    fn logo_is_linked_when_website_present() {
        let html = render_signature_html(&full());
        let anchor = html.find(r#"<a href="http://x.com""#).unwrap();
        let img = html.find(r#"<img src="http://x/l.png""#).unwrap();
        let close = html.find("</a>").unwrap();
        assert!(anchor < img && img < close);
        assert!(html.contains(r#"alt="Company Logo" width="60" height="60""#));
    }

    #[test]
    fn logo_is_unlinked_without_website() {
        let data = SignatureData {
            website_url: String::new(),
            ..full()
        };
        let html = render_signature_html(&data);
        assert!(html.contains(r#"<img src="http://x/l.png""#));
        assert!(!html.contains("<a "));
    }

    #[test]
    fn website_alone_renders_no_link() {
        let data = SignatureData {
            logo_url: String::new(),
            ..full()
        };
        let html = render_signature_html(&data);
        assert!(!html.contains("<a "));
        assert!(!html.contains("<img"));
    }

    #[test]
    fn name_is_escaped() {
        let data = SignatureData {
            name: "<script>alert('x')</script>".into(),
            ..Default::default()
        };
        let html = render_signature_html(&data);
        assert!(html.contains("&lt;script&gt;alert(&#039;x&#039;)&lt;/script&gt;"));
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn urls_cannot_break_out_of_attributes() {
        let data = SignatureData {
            logo_url: r#"x" onerror="alert(1)"#.into(),
            website_url: r#"y"><script>"#.into(),
            ..Default::default()
        };
        let html = render_signature_html(&data);
        assert!(html.contains(r#"src="x&quot; onerror=&quot;alert(1)""#));
        assert!(html.contains(r#"href="y&quot;&gt;&lt;script&gt;""#));
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn plain_text_lists_present_lines() {
        assert_eq!(
            render_signature_text(&full()),
            "Jane Doe\nEngineer, Acme\n555-1234 • @jdoe\nhttp://x.com"
        );
        assert_eq!(render_signature_text(&SignatureData::default()), "");

        let data = SignatureData {
            name: "A & B".into(),
            ..Default::default()
        };
        assert_eq!(render_signature_text(&data), "A & B");
    }

    #[test]
    fn presence_helpers() {
        let mut data = SignatureData::default();
        assert!(!data.has_content());
        assert!(!data.has_required_fields());

        data.name = "   ".into();
        assert!(data.has_content());
        assert!(!data.has_required_fields());

        data.name = "Jane".into();
        assert!(data.has_required_fields());

        let website_only = SignatureData {
            website_url: "http://x.com".into(),
            ..Default::default()
        };
        assert!(!website_only.has_content());
    }
}
