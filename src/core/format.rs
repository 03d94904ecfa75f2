//! Message construction for the two call styles
//!
//! - values style: every argument is rendered with `Display` and the pieces
//!   are joined without separators
//! - format style: a runtime template with `{}` (next argument) and `{N}`
//!   (argument `N`) placeholders; `{{` and `}}` are literal braces
//!
//! Format templates are checked when the message is built. A bad
//! placeholder, an unmatched brace, a missing argument or an argument that
//! the template never uses is a [`LoggerError::Format`].

use super::error::{LoggerError, Result};
use std::fmt::{self, Display, Write};

/// Join the `Display` renderings of `values`.
pub fn concat_values(values: &[&dyn Display]) -> String {
    let mut out = String::new();
    for value in values {
        // Writing into a String cannot fail.
        let _ = write!(out, "{}", value);
    }
    out
}

/// Render `spec` with `args`.
///
/// ```
/// use rust_sink_logger::core::format::format_message;
///
/// let msg = format_message("{} of {}", &[&3, &5]).unwrap();
/// assert_eq!(msg, "3 of 5");
///
/// let msg = format_message("{1} before {0}", &[&"b", &"a"]).unwrap();
/// assert_eq!(msg, "a before b");
///
/// assert!(format_message("{} {}", &[&1]).is_err());
/// ```
pub fn format_message(spec: &str, args: &[&dyn Display]) -> Result<String> {
    let mut out = String::with_capacity(spec.len());
    let mut used = vec![false; args.len()];
    let mut next = 0usize;
    let mut chars = spec.char_indices().peekable();

    while let Some((pos, c)) = chars.next() {
        match c {
            '{' => {
                if let Some((_, '{')) = chars.peek() {
                    chars.next();
                    out.push('{');
                    continue;
                }

                let mut placeholder = String::new();
                let mut closed = false;
                for (_, inner) in chars.by_ref() {
                    if inner == '}' {
                        closed = true;
                        break;
                    }
                    placeholder.push(inner);
                }
                if !closed {
                    return Err(LoggerError::format(
                        spec,
                        format!("unmatched '{{' at byte {}", pos),
                    ));
                }

                let index = if placeholder.is_empty() {
                    let index = next;
                    next += 1;
                    index
                } else {
                    placeholder.trim().parse::<usize>().map_err(|_| {
                        LoggerError::format(
                            spec,
                            format!("unsupported placeholder '{{{}}}'", placeholder),
                        )
                    })?
                };

                let arg = args.get(index).ok_or_else(|| {
                    LoggerError::format(
                        spec,
                        format!(
                            "placeholder refers to argument {} but {} argument(s) were given",
                            index,
                            args.len()
                        ),
                    )
                })?;
                used[index] = true;
                write_arg(&mut out, *arg).map_err(|_| {
                    LoggerError::format(spec, format!("argument {} failed to render", index))
                })?;
            }
            '}' => {
                if let Some((_, '}')) = chars.peek() {
                    chars.next();
                    out.push('}');
                } else {
                    return Err(LoggerError::format(
                        spec,
                        format!("unmatched '}}' at byte {}", pos),
                    ));
                }
            }
            _ => out.push(c),
        }
    }

    if let Some(unused) = used.iter().position(|u| !u) {
        return Err(LoggerError::format(
            spec,
            format!("argument {} is never used", unused),
        ));
    }

    Ok(out)
}

fn write_arg(out: &mut String, arg: &dyn Display) -> fmt::Result {
    write!(out, "{}", arg)
}
