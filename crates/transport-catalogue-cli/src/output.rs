//! Output formatting for stat and route results.
//!
//! Every renderer writes to a caller-supplied sink; `main` passes a locked
//! stdout.

use std::io::{self, Write};

use clap::ValueEnum;
use serde::Serialize;

use transport_catalogue_lib::{BusInfo, RouteItem, RoutePlan};

/// Presentation style for single-query commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable lines.
    #[default]
    Text,
    /// Pretty-printed JSON.
    Json,
}

#[derive(Debug, Serialize)]
struct BusReport<'a> {
    name: &'a str,
    #[serde(flatten)]
    info: &'a BusInfo,
}

#[derive(Debug, Serialize)]
struct StopReport<'a> {
    name: &'a str,
    buses: &'a [&'a str],
}

#[derive(Debug, Serialize)]
struct RouteReport<'a> {
    from: &'a str,
    to: &'a str,
    #[serde(flatten)]
    plan: &'a RoutePlan,
}

impl OutputFormat {
    /// Render statistics for one bus line.
    pub fn render_bus<W: Write>(self, out: &mut W, name: &str, info: &BusInfo) -> io::Result<()> {
        match self {
            OutputFormat::Text => writeln!(
                out,
                "Bus {}: {} stops on route, {} unique stops, {} route length, {:.5} curvature",
                name, info.stop_count, info.unique_stop_count, info.route_length, info.curvature
            ),
            OutputFormat::Json => write_json(out, &BusReport { name, info }),
        }
    }

    /// Render the buses serving one stop.
    pub fn render_stop<W: Write>(self, out: &mut W, name: &str, buses: &[&str]) -> io::Result<()> {
        match self {
            OutputFormat::Text if buses.is_empty() => writeln!(out, "Stop {}: no buses", name),
            OutputFormat::Text => writeln!(out, "Stop {}: buses {}", name, buses.join(" ")),
            OutputFormat::Json => write_json(out, &StopReport { name, buses }),
        }
    }

    /// Render a planned trip.
    pub fn render_route<W: Write>(
        self,
        out: &mut W,
        from: &str,
        to: &str,
        plan: &RoutePlan,
    ) -> io::Result<()> {
        match self {
            OutputFormat::Text => render_route_text(out, from, to, plan),
            OutputFormat::Json => write_json(out, &RouteReport { from, to, plan }),
        }
    }
}

fn render_route_text<W: Write>(out: &mut W, from: &str, to: &str, plan: &RoutePlan) -> io::Result<()> {
    writeln!(
        out,
        "Route from {} to {} (total time: {:.2} min; {} rides):",
        from,
        to,
        plan.total_time,
        plan.ride_count()
    )?;
    if plan.items.is_empty() {
        writeln!(out, "- already at {}", to)?;
    }
    for item in &plan.items {
        match item {
            RouteItem::Wait { stop_name, time } => {
                writeln!(out, "- wait {:.2} min at {}", time, stop_name)?
            }
            RouteItem::Bus {
                bus,
                span_count,
                time,
            } => writeln!(
                out,
                "- ride bus {} for {} {} ({:.2} min)",
                bus,
                span_count,
                if *span_count == 1 { "stop" } else { "stops" },
                time
            )?,
        }
    }
    Ok(())
}

/// Write any serializable value as pretty JSON followed by a newline.
pub fn write_json<W: Write, T: Serialize + ?Sized>(out: &mut W, value: &T) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_plan() -> RoutePlan {
        RoutePlan {
            total_time: 26.7,
            items: vec![
                RouteItem::Wait {
                    stop_name: "Tolstopaltsevo".to_string(),
                    time: 6.0,
                },
                RouteItem::Bus {
                    bus: "635".to_string(),
                    span_count: 2,
                    time: 20.7,
                },
            ],
        }
    }

    fn render(f: impl FnOnce(&mut Vec<u8>) -> io::Result<()>) -> String {
        let mut buffer = Vec::new();
        f(&mut buffer).expect("render succeeds");
        String::from_utf8(buffer).expect("utf-8 output")
    }

    #[test]
    fn text_bus_line_lists_all_statistics() {
        let info = BusInfo {
            stop_count: 5,
            unique_stop_count: 3,
            route_length: 27_200,
            curvature: 1.5,
        };
        let text = render(|out| OutputFormat::Text.render_bus(out, "635", &info));
        assert_eq!(
            text,
            "Bus 635: 5 stops on route, 3 unique stops, 27200 route length, 1.50000 curvature\n"
        );
    }

    #[test]
    fn text_stop_without_buses_says_so() {
        let text = render(|out| OutputFormat::Text.render_stop(out, "Prazhskaya", &[]));
        assert_eq!(text, "Stop Prazhskaya: no buses\n");
    }

    #[test]
    fn text_route_lists_each_leg() {
        let plan = sample_plan();
        let text =
            render(|out| OutputFormat::Text.render_route(out, "Tolstopaltsevo", "Rasskazovka", &plan));
        assert!(text.starts_with(
            "Route from Tolstopaltsevo to Rasskazovka (total time: 26.70 min; 1 rides):"
        ));
        assert!(text.contains("- wait 6.00 min at Tolstopaltsevo"));
        assert!(text.contains("- ride bus 635 for 2 stops (20.70 min)"));
    }

    #[test]
    fn json_route_flattens_plan() {
        let plan = sample_plan();
        let text =
            render(|out| OutputFormat::Json.render_route(out, "Tolstopaltsevo", "Rasskazovka", &plan));
        let value: serde_json::Value = serde_json::from_str(&text).expect("valid json");
        assert_eq!(value["from"], "Tolstopaltsevo");
        assert_eq!(value["items"][1]["type"], "Bus");
        assert_eq!(value["items"][1]["span_count"], 2);
    }
}
