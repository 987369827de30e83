//! Server-side rendering of the public FAQ page.
//!
//! Questions are plain text and escaped. Answers are stored as rich-text
//! HTML authored through the admin surface and are emitted as-is.

use faqdesk_core::language::{Language, SUPPORTED_LANGUAGES};

use crate::service::TranslatedFaq;

/// Page heading per language; unknown codes use English.
const HEADINGS: [(Language, &str); 3] = [
    (Language::English, "Frequently Asked Questions"),
    (Language::Hindi, "अक्सर पूछे जाने वाले प्रश्न"),
    (Language::Bengali, "সচরাচর জিজ্ঞাসিত প্রশ্নাবলী"),
];

const EMPTY_MESSAGES: [(Language, &str); 3] = [
    (Language::English, "No FAQs available yet."),
    (Language::Hindi, "अभी कोई प्रश्न उपलब्ध नहीं है।"),
    (Language::Bengali, "এখনও কোনো প্রশ্ন নেই।"),
];

const STYLE: &str = "\
    body { font-family: system-ui, -apple-system, Segoe UI, Roboto, sans-serif; margin: 0 auto; max-width: 760px; padding: 24px; color: #1f2933; }\n\
    nav.languages { margin-bottom: 24px; }\n\
    nav.languages a { margin-right: 12px; color: #3e4c59; text-decoration: none; }\n\
    nav.languages a.active { font-weight: 600; color: #0b69a3; }\n\
    article.faq { border-bottom: 1px solid #e4e7eb; padding: 16px 0; }\n\
    article.faq h2 { font-size: 1.1rem; margin: 0 0 8px; }\n\
    article.faq time { font-size: 0.8rem; color: #7b8794; }\n";

fn lookup(table: &[(Language, &'static str)], lang: &str) -> &'static str {
    let language = Language::from_code(lang).unwrap_or(Language::English);
    table
        .iter()
        .find(|(l, _)| *l == language)
        .map(|(_, text)| *text)
        .unwrap_or(table[0].1)
}

fn escape(value: &str) -> String {
    v_htmlescape::escape(value).to_string()
}

/// Render the home page listing `faqs` for the language `lang`.
pub fn render_home(faqs: &[TranslatedFaq], lang: &str) -> String {
    let mut html = String::new();
    let heading = lookup(&HEADINGS, lang);

    html.push_str("<!doctype html>\n");
    html.push_str(&format!("<html lang=\"{}\">\n<head>\n", escape(lang)));
    html.push_str("  <meta charset=\"utf-8\">\n");
    html.push_str(
        "  <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n",
    );
    html.push_str(&format!("  <title>{heading}</title>\n"));
    html.push_str(&format!("  <style>\n{STYLE}  </style>\n</head>\n<body>\n"));
    html.push_str(&format!("<h1>{heading}</h1>\n"));

    html.push_str("<nav class=\"languages\">\n");
    for language in SUPPORTED_LANGUAGES {
        let class = if language.code() == lang {
            " class=\"active\""
        } else {
            ""
        };
        html.push_str(&format!(
            "  <a href=\"/?lang={}\"{class}>{}</a>\n",
            language.code(),
            language.native_name()
        ));
    }
    html.push_str("</nav>\n");

    if faqs.is_empty() {
        html.push_str(&format!(
            "<p class=\"empty\">{}</p>\n",
            lookup(&EMPTY_MESSAGES, lang)
        ));
    }

    for faq in faqs {
        html.push_str(&format!("<article class=\"faq\" id=\"faq-{}\">\n", faq.id));
        html.push_str(&format!("  <h2>{}</h2>\n", escape(&faq.question)));
        html.push_str(&format!("  <div class=\"answer\">{}</div>\n", faq.answer));
        html.push_str(&format!(
            "  <time datetime=\"{}\">{}</time>\n",
            faq.created_at.to_rfc3339(),
            faq.created_at.format("%Y-%m-%d")
        ));
        html.push_str("</article>\n");
    }

    html.push_str("</body>\n</html>\n");
    html
}
