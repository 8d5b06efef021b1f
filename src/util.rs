use std::fmt::Debug;

// renders the element under a cursor for the trace log
pub(crate) fn preview<T: Debug>(item: &Option<T>) -> String {
    let body = match item {
        Some(t) => format!("{t:?}").chars().take(16).collect::<String>(),
        None => String::from("<end>"),
    };
    format!("|{body}|")
}

pub(crate) fn snippet(s: &str) -> String {
    let body = s.escape_default().take(33).collect::<String>();
    format!("|{body}|")
}
