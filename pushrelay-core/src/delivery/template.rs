//! Notification page templates

use crate::delivery::encoding::{encode, escape};

const DEFAULT_LANGUAGE: &str = "en";

/// Localized captions of the notification page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageLabels {
    pub title: &'static str,
    pub placeholder: &'static str,
    pub send: &'static str,
    pub back: &'static str,
}

const EN_LABELS: PageLabels = PageLabels {
    title: "New message",
    placeholder: "Type your reply",
    send: "Send",
    back: "Back",
};

const RU_LABELS: PageLabels = PageLabels {
    title: "Новое сообщение",
    placeholder: "Введите ответ",
    send: "Отправить",
    back: "Назад",
};

impl PageLabels {
    /// Labels for a language tag such as `ru` or `ru-RU`; unknown tags fall back to English.
    pub fn for_language(language: &str) -> Self {
        let primary = language
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .trim()
            .to_ascii_lowercase();
        match primary.as_str() {
            "ru" => RU_LABELS,
            _ => EN_LABELS,
        }
    }
}

/// Build the page pushed to the end-user.
///
/// `message` is embedded as-is: callers hand over already formatted markup.
/// `escaped_input_url` must already be markup-escaped and `encoded_back_url`
/// already URL-encoded.
pub fn build_basic_page(
    message: &str,
    escaped_input_url: &str,
    encoded_back_url: &str,
    language: &str,
) -> String {
    let labels = PageLabels::for_language(language);
    let lang = if language.trim().is_empty() {
        DEFAULT_LANGUAGE.to_string()
    } else {
        escape(language.trim())
    };

    format!(
        concat!(
            "<!DOCTYPE html>",
            "<html lang=\"{lang}\">",
            "<head>",
            "<meta charset=\"utf-8\"/>",
            "<title>{title}</title>",
            "</head>",
            "<body>",
            "<div class=\"message\">{message}</div>",
            "<form method=\"post\" action=\"{action}\">",
            "<input type=\"hidden\" name=\"back_url\" value=\"{back_url}\"/>",
            "<input type=\"text\" name=\"text\" placeholder=\"{placeholder}\"/>",
            "<button type=\"submit\" name=\"action\" value=\"send\">{send}</button>",
            "<button type=\"submit\" name=\"action\" value=\"back\">{back}</button>",
            "</form>",
            "</body>",
            "</html>"
        ),
        lang = lang,
        title = labels.title,
        message = message,
        action = escaped_input_url,
        back_url = encoded_back_url,
        placeholder = labels.placeholder,
        send = labels.send,
        back = labels.back,
    )
}

/// Compose the callback URL the notification page posts back to.
///
/// The base URL is concatenated without validation.
pub fn build_input_url(
    deploy_base_url: &str,
    domain: &str,
    language: &str,
    encoded_back_url: &str,
) -> String {
    format!(
        "{}/input?domain={}&lang={}&back_url={}",
        deploy_base_url.trim_end_matches('/'),
        encode(domain),
        encode(language),
        encoded_back_url
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::delivery::encoding::decode;

    #[test]
    fn test_labels_for_language() {
        assert_eq!(PageLabels::for_language("en"), EN_LABELS);
        assert_eq!(PageLabels::for_language("ru"), RU_LABELS);
        assert_eq!(PageLabels::for_language("RU-ru"), RU_LABELS);
        assert_eq!(PageLabels::for_language("ru_RU"), RU_LABELS);
        assert_eq!(PageLabels::for_language("de"), EN_LABELS);
        assert_eq!(PageLabels::for_language(""), EN_LABELS);
    }

    #[test]
    fn test_basic_page_embeds_inputs() {
        let page = build_basic_page(
            "<b>Hello</b>",
            "http://plugin/input?domain=d&amp;lang=en",
            "http%3A%2F%2Fcb%2F",
            "en",
        );

        assert!(page.starts_with("<!DOCTYPE html><html lang=\"en\">"));
        assert!(page.contains("<div class=\"message\"><b>Hello</b></div>"));
        assert!(page.contains("action=\"http://plugin/input?domain=d&amp;lang=en\""));
        assert!(page.contains("name=\"back_url\" value=\"http%3A%2F%2Fcb%2F\""));
        assert!(page.contains(">Send</button>"));
        assert!(page.ends_with("</html>"));
    }

    #[test]
    fn test_basic_page_is_deterministic() {
        let a = build_basic_page("Hi", "u", "b", "ru");
        let b = build_basic_page("Hi", "u", "b", "ru");
        assert_eq!(a, b);
        assert!(a.contains("Отправить"));
    }

    #[test]
    fn test_basic_page_escapes_language_attribute() {
        let page = build_basic_page("Hi", "u", "b", "en\"><script>");
        assert!(page.contains("lang=\"en&quot;&gt;&lt;script&gt;\""));
        assert!(!page.contains("<script>"));

        let page = build_basic_page("Hi", "u", "b", "  ");
        assert!(page.contains("lang=\"en\""));
    }

    #[test]
    fn test_input_url_composition() {
        let url = build_input_url("http://plugin/", "d.example", "en", "http%3A%2F%2Fcb%2F");
        assert_eq!(
            url,
            "http://plugin/input?domain=d.example&lang=en&back_url=http%3A%2F%2Fcb%2F"
        );

        let url = build_input_url("http://plugin", "my domain", "ru", "");
        assert_eq!(url, "http://plugin/input?domain=my+domain&lang=ru&back_url=");
    }

    #[test]
    fn test_input_url_keeps_back_url_encoded_once() {
        let encoded = encode("http://cb/?a=1&b=2");
        let url = build_input_url("http://plugin", "d", "en", &encoded);
        let back = url.split("back_url=").nth(1).unwrap();
        assert_eq!(decode(back), "http://cb/?a=1&b=2");
    }

    #[test]
    fn test_malformed_base_propagates() {
        let url = build_input_url("not a url", "d", "en", "");
        assert!(url.starts_with("not a url/input?"));
    }
}
