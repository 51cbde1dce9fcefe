//! Display formatting and validation helpers.

/// Shortens `text` to `len` characters, appending `...` when cut.
pub fn truncate(text: &str, len: usize) -> String {
    match text.char_indices().nth(len) {
        Some((end, _)) => format!("{}...", &text[..end]),
        None => text.to_string(),
    }
}

/// Formats a bare 10-digit number as `+91-XXXXXXXXXX`; other input is
/// returned unchanged.
pub fn format_phone(phone: &str) -> String {
    let digits: String = phone.chars().filter(char::is_ascii_digit).collect();
    if digits.len() == 10 {
        format!("+91-{digits}")
    } else {
        phone.to_string()
    }
}

/// `local@domain.tld` with no whitespace and exactly one `@`.
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}

/// Optional leading `+`, then 1 to 16 digits not starting with 0.
/// Spaces are ignored.
pub fn is_valid_phone(phone: &str) -> bool {
    let compact: String = phone.chars().filter(|c| !c.is_whitespace()).collect();
    let digits = compact.strip_prefix('+').unwrap_or(&compact);
    !digits.is_empty()
        && digits.len() <= 16
        && digits.chars().all(|c| c.is_ascii_digit())
        && !digits.starts_with('0')
}

/// Badge fallback: first letter of the first two words, upper-cased.
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .flat_map(char::to_uppercase)
        .take(2)
        .collect()
}

/// Scroll speed of a skills marquee row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarqueeSpeed {
    Normal,
    Slow,
}

/// One animated row of skill badges.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarqueeRow {
    pub reverse: bool,
    pub speed: MarqueeSpeed,
}

impl MarqueeRow {
    pub fn css_class(&self) -> String {
        let speed = match self.speed {
            MarqueeSpeed::Normal => "marquee-normal",
            MarqueeSpeed::Slow => "marquee-slow",
        };
        if self.reverse {
            format!("marquee {speed} marquee-reverse")
        } else {
            format!("marquee {speed}")
        }
    }
}

pub const MARQUEE_ROWS: [MarqueeRow; 4] = [
    MarqueeRow {
        reverse: false,
        speed: MarqueeSpeed::Normal,
    },
    MarqueeRow {
        reverse: true,
        speed: MarqueeSpeed::Normal,
    },
    MarqueeRow {
        reverse: false,
        speed: MarqueeSpeed::Slow,
    },
    MarqueeRow {
        reverse: true,
        speed: MarqueeSpeed::Slow,
    },
];
