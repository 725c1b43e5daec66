//! Ready-to-paste submission code and share links for a scraped form.

use serde::{Deserialize, Serialize};

use crate::encode::form_base_url;
use crate::types::FormEntry;

/// Public links for a form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormLinks {
    /// Respondent view.
    pub view: String,
    /// Owner's response summary.
    pub analytics: String,
}

pub fn form_links(form_url: &str) -> FormLinks {
    let base = form_base_url(form_url);
    FormLinks {
        view: format!("{base}/viewform?usp=dialog"),
        analytics: format!("{base}/viewanalytics"),
    }
}

/// Render a Rust snippet submitting one empty value per entry.
pub fn render_snippet(entries: &[FormEntry]) -> String {
    let mut out = String::from("let response = client\n    .submit(&SubmitRequest::new(vec![\n");
    for entry in entries {
        let label: String = entry
            .label
            .chars()
            .map(|c| if c.is_control() { ' ' } else { c })
            .collect();
        out.push_str(&format!(
            "        FormItem::new({:?}, \"\"), // {}\n",
            entry.id,
            label.trim()
        ));
    }
    out.push_str("    ]))\n    .await;\n");
    out
}
