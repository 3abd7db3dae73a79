//! Attribute expressions
//!
//! Property values may reference record attributes as `${name}`. Missing
//! attributes resolve to an empty string, `$${` is a literal `${`, and an
//! unterminated `${` is kept as text.

use crate::record::Record;

/// A piece of a property value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Segment<'a> {
    Text(&'a str),
    Reference(&'a str),
}

/// Splits a template into literal text and `${name}` references
struct Segments<'a> {
    rest: &'a str,
}

impl<'a> Iterator for Segments<'a> {
    type Item = Segment<'a>;

    fn next(&mut self) -> Option<Segment<'a>> {
        if self.rest.is_empty() {
            return None;
        }

        let rest = self.rest;
        match rest.find('$') {
            None => {
                self.rest = "";
                Some(Segment::Text(rest))
            }
            Some(pos) if pos > 0 => {
                self.rest = &rest[pos..];
                Some(Segment::Text(&rest[..pos]))
            }
            Some(_) => {
                if let Some(after) = rest.strip_prefix("$${") {
                    self.rest = after;
                    Some(Segment::Text("${"))
                } else if let Some(body) = rest.strip_prefix("${") {
                    match body.find('}') {
                        Some(end) => {
                            self.rest = &body[end + 1..];
                            Some(Segment::Reference(body[..end].trim()))
                        }
                        None => {
                            self.rest = "";
                            Some(Segment::Text(rest))
                        }
                    }
                } else {
                    self.rest = &rest[1..];
                    Some(Segment::Text(&rest[..1]))
                }
            }
        }
    }
}

fn segments(template: &str) -> Segments<'_> {
    Segments { rest: template }
}

/// Whether a property value references any attribute
pub fn is_expression(value: &str) -> bool {
    segments(value).any(|segment| matches!(segment, Segment::Reference(_)))
}

/// Substitute `${name}` references with the record's attribute values.
pub fn evaluate<R: Record + ?Sized>(template: &str, record: &R) -> String {
    let mut out = String::with_capacity(template.len());
    for segment in segments(template) {
        match segment {
            Segment::Text(text) => out.push_str(text),
            Segment::Reference(name) => out.push_str(record.attribute(name).unwrap_or("")),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::FlowRecord;
    use pretty_assertions::assert_eq;

    fn record() -> FlowRecord {
        FlowRecord::new("r1")
            .with_attribute("team", "Mets")
            .with_attribute("city", "New York")
    }

    #[test]
    fn test_plain_text() {
        assert_eq!(evaluate("no references", &record()), "no references");
        assert_eq!(evaluate("", &record()), "");
    }

    #[test]
    fn test_substitution() {
        assert_eq!(evaluate("${city} ${team}", &record()), "New York Mets");
        assert_eq!(evaluate("${ team }!", &record()), "Mets!");
    }

    #[test]
    fn test_missing_attribute_is_empty() {
        assert_eq!(evaluate("[${nope}]", &record()), "[]");
    }

    #[test]
    fn test_escapes_and_stray_dollars() {
        assert_eq!(evaluate("$${team}", &record()), "${team}");
        assert_eq!(evaluate("cost $5", &record()), "cost $5");
        assert_eq!(evaluate("tail $", &record()), "tail $");
        assert_eq!(evaluate("${team", &record()), "${team");
    }

    #[test]
    fn test_is_expression() {
        assert!(is_expression("${a}"));
        assert!(is_expression("x ${a} y"));
        assert!(!is_expression("80"));
        assert!(!is_expression("$${a}"));
        assert!(!is_expression("${a"));
    }

    #[test]
    fn test_is_expression_agrees_with_evaluate() {
        let record = FlowRecord::new("r1").with_attribute("a", "X");
        let cases = [
            ("$$${a}", false, "$${a}"),
            ("$$$${a}", false, "$$${a}"),
            ("$ ${a}", true, "$ X"),
            ("$$${a}${a}", true, "$${a}X"),
            ("${a", false, "${a"),
        ];
        for (template, expression, resolved) in cases {
            assert_eq!(is_expression(template), expression, "{}", template);
            assert_eq!(evaluate(template, &record), resolved, "{}", template);
        }
    }
}
