use crate::dataset::Dataset;
use crate::prelude::{AxisToken, SelectionState, StateSource};
use serde_json::Value;
use std::collections::{BTreeSet, HashSet};

const TIME_KEY: &str = "time";
const X_AXIS_KEY: &str = "xAxisOption";
const Y_AXIS_KEY: &str = "yAxisOption";
const TIME_AXIS: &str = "_TIME";
const ALPHABETICAL_AXIS: &str = "_ALPHABETICAL";

/// Axis index standing for "ordered alphabetically", never plottable.
pub const ALPHABETICAL_SENTINEL: i64 = 100;
pub const DEFAULT_X_AXIS: i64 = 1;
pub const DEFAULT_Y_AXIS: i64 = 2;

#[derive(Debug, Clone, PartialEq)]
enum Token {
    Quoted(String),
    Bare(String),
    Separator,
    Open,
    Close,
    Punct,
}

impl Token {
    fn text(&self) -> Option<&str> {
        match self {
            Token::Quoted(text) | Token::Bare(text) => Some(text.as_str()),
            _ => None,
        }
    }
}

/// Widget state reduced to its top-level members and its string values.
///
/// Well-formed JSON is read with `serde_json`. Anything else (truncated
/// documents, `key=value` strings) goes through a scan where a key is a token
/// followed by `:` or `=` at the outermost object level. Selection membership
/// only ever compares complete string values.
#[derive(Debug, Clone, Default)]
pub struct SerializedState {
    pairs: Vec<(String, String)>,
    quoted_values: HashSet<String>,
}

impl SerializedState {
    pub fn parse(raw: &str) -> Self {
        match serde_json::from_str::<Value>(raw) {
            Ok(document) => Self::from_document(&document),
            Err(_) => Self::scan(raw),
        }
    }

    fn from_document(document: &Value) -> Self {
        let pairs = document
            .as_object()
            .map(|members| {
                members
                    .iter()
                    .filter_map(|(key, value)| scalar_text(value).map(|text| (key.clone(), text)))
                    .collect()
            })
            .unwrap_or_default();
        let mut quoted_values = HashSet::new();
        collect_strings(document, &mut quoted_values);

        Self {
            pairs,
            quoted_values,
        }
    }

    fn scan(raw: &str) -> Self {
        let tokens = tokenize(raw);
        let mut pairs = Vec::new();
        let mut keys = HashSet::new();
        let mut depth = 0usize;

        for (idx, token) in tokens.iter().enumerate() {
            match token {
                Token::Open => depth += 1,
                Token::Close => depth = depth.saturating_sub(1),
                _ => {}
            }
            if !matches!(tokens.get(idx + 1), Some(Token::Separator)) {
                continue;
            }
            keys.insert(idx);
            if depth > 1 {
                continue;
            }
            if let (Some(key), Some(value)) =
                (token.text(), tokens.get(idx + 2).and_then(Token::text))
            {
                pairs.push((key.to_string(), value.to_string()));
            }
        }

        let quoted_values = tokens
            .iter()
            .enumerate()
            .filter(|(idx, _)| !keys.contains(idx))
            .filter_map(|(_, token)| match token {
                Token::Quoted(text) => Some(text.clone()),
                _ => None,
            })
            .collect();

        Self {
            pairs,
            quoted_values,
        }
    }

    fn values_of<'a>(&'a self, key: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.pairs
            .iter()
            .filter(move |(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    fn axis(&self, key: &str) -> Option<AxisToken> {
        let mut numeric = None;
        for value in self.values_of(key) {
            match value {
                TIME_AXIS => return Some(AxisToken::Time),
                ALPHABETICAL_AXIS => return Some(AxisToken::Alphabetical),
                other => {
                    if numeric.is_none() {
                        numeric = leading_integer(other).map(AxisToken::Column);
                    }
                }
            }
        }
        numeric
    }
}

impl StateSource for SerializedState {
    fn time_token(&self) -> Option<i64> {
        self.values_of(TIME_KEY).find_map(leading_integer)
    }

    fn x_axis_token(&self) -> Option<AxisToken> {
        self.axis(X_AXIS_KEY)
    }

    fn y_axis_token(&self) -> Option<AxisToken> {
        self.axis(Y_AXIS_KEY)
    }

    fn contains_key(&self, key: &str) -> bool {
        self.quoted_values.contains(key)
    }
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text.clone()),
        Value::Number(number) => Some(number.to_string()),
        _ => None,
    }
}

fn collect_strings(value: &Value, out: &mut HashSet<String>) {
    match value {
        Value::String(text) => {
            out.insert(text.clone());
        }
        Value::Array(items) => items.iter().for_each(|item| collect_strings(item, out)),
        Value::Object(members) => members
            .values()
            .for_each(|member| collect_strings(member, out)),
        _ => {}
    }
}

fn tokenize(raw: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut chars = raw.char_indices().peekable();

    while let Some((start, ch)) = chars.next() {
        match ch {
            '"' => {
                let mut end = None;
                let mut escaped = false;
                for (idx, c) in chars.by_ref() {
                    if escaped {
                        escaped = false;
                    } else if c == '\\' {
                        escaped = true;
                    } else if c == '"' {
                        end = Some(idx + 1);
                        break;
                    }
                }
                // An unterminated string is not a complete token.
                match end {
                    Some(end) => tokens.push(Token::Quoted(unquote(&raw[start..end]))),
                    None => tokens.push(Token::Punct),
                }
            }
            ':' | '=' => tokens.push(Token::Separator),
            '{' | '[' => tokens.push(Token::Open),
            '}' | ']' => tokens.push(Token::Close),
            c if is_bare(c) => {
                let mut end = start + c.len_utf8();
                while let Some(&(idx, next)) = chars.peek() {
                    if !is_bare(next) {
                        break;
                    }
                    end = idx + next.len_utf8();
                    chars.next();
                }
                tokens.push(Token::Bare(raw[start..end].to_string()));
            }
            c if c.is_whitespace() => {}
            _ => tokens.push(Token::Punct),
        }
    }

    tokens
}

fn is_bare(c: char) -> bool {
    c.is_alphanumeric() || matches!(c, '_' | '-' | '.' | '+')
}

/// Decodes a JSON string literal, keeping the raw body when it is malformed.
fn unquote(literal: &str) -> String {
    serde_json::from_str::<String>(literal).unwrap_or_else(|_| {
        let body = literal.strip_prefix('"').unwrap_or(literal);
        body.strip_suffix('"').unwrap_or(body).to_string()
    })
}

fn leading_integer(text: &str) -> Option<i64> {
    let text = text.trim();
    let (sign, digits) = match text.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, text),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    digits[..end].parse::<i64>().ok().map(|value| sign * value)
}

/// Reads a `SelectionState` out of the widget's serialized state.
#[derive(Debug, Clone, Copy)]
pub struct StateExtractor {
    base_year: i64,
}

impl StateExtractor {
    pub fn new(base_year: i64) -> Self {
        Self { base_year }
    }

    /// Never fails: absent or unreadable pieces fall back to their defaults,
    /// and a null or blank state yields the empty selection.
    pub fn extract(&self, state: Option<&str>, dataset: &Dataset) -> SelectionState {
        match state.filter(|raw| !raw.trim().is_empty()) {
            Some(raw) => self.extract_from(&SerializedState::parse(raw), dataset),
            None => SelectionState::default(),
        }
    }

    pub fn extract_from<S: StateSource>(&self, source: &S, dataset: &Dataset) -> SelectionState {
        let time_offset = source
            .time_token()
            .map(|token| token.saturating_sub(self.base_year))
            .unwrap_or(0);
        let selected_models: BTreeSet<String> = dataset
            .model_names()
            .filter(|name| source.contains_key(name))
            .map(str::to_string)
            .collect();

        SelectionState {
            selected_models,
            time_offset,
            x_axis_index: source
                .x_axis_token()
                .map(axis_index)
                .unwrap_or(DEFAULT_X_AXIS),
            y_axis_index: source
                .y_axis_token()
                .map(axis_index)
                .unwrap_or(DEFAULT_Y_AXIS),
        }
    }
}

fn axis_index(token: AxisToken) -> i64 {
    match token {
        AxisToken::Time => 1,
        AxisToken::Alphabetical => ALPHABETICAL_SENTINEL,
        AxisToken::Column(index) => index,
    }
}
