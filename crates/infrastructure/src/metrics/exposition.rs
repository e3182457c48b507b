use std::fmt::Write;

fn write_header(out: &mut String, name: &str, help: &str, kind: &str) {
    let _ = writeln!(out, "# HELP {} {}", name, help);
    let _ = writeln!(out, "# TYPE {} {}", name, kind);
}

pub(super) fn write_counter(out: &mut String, name: &str, help: &str, value: u64) {
    write_header(out, name, help, "counter");
    let _ = writeln!(out, "{} {}", name, value);
}

pub(super) fn write_gauge(out: &mut String, name: &str, help: &str, value: u64) {
    write_header(out, name, help, "gauge");
    let _ = writeln!(out, "{} {}", name, value);
}

pub(super) fn write_labeled_counter<I>(out: &mut String, name: &str, help: &str, series: I)
where
    I: IntoIterator<Item = (Vec<(&'static str, String)>, u64)>,
{
    write_header(out, name, help, "counter");
    for (labels, value) in series {
        let rendered: Vec<String> = labels
            .iter()
            .map(|(key, val)| format!("{}=\"{}\"", key, escape_label_value(val)))
            .collect();
        let _ = writeln!(out, "{}{{{}}} {}", name, rendered.join(","), value);
    }
}

pub(super) fn escape_label_value(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '"' => escaped.push_str("\\\""),
            '\n' => escaped.push_str("\\n"),
            other => escaped.push(other),
        }
    }
    escaped
}
