use crate::analyze::{summarize, Summary};
use crate::probe::{ProbeResult, ProbeTarget};

/// One line describing an answered request.
pub fn result_line(result: &ProbeResult) -> String {
  match (result.response_size(), result.amplification_factor()) {
    (Some(size), Some(factor)) => {
      format!("{}: {} -> {} bytes, amplification factor {:.2}",
              result.request,
              result.request_size,
              size,
              factor)
    }
    _ => format!("{}: {} bytes, no response", result.request, result.request_size),
  }
}

fn summary_line(summary: &Summary) -> String {
  let max = match summary.max_factor {
    Some(factor) => format!("{:.2}", factor),
    None => "n/a".to_owned(),
  };
  format!("{} requests, {} responses, {} timeouts, {} amplifying, largest factor {}",
          summary.probes,
          summary.responses,
          summary.timeouts,
          summary.amplifying,
          max)
}

/// Print the amplifying results and a summary to standard output.
pub fn print_report(target: &ProbeTarget, results: &[ProbeResult], amplifying: &[&ProbeResult]) {
  println!("Amplification check of {} ({}), threshold {}",
           target.host,
           target.addr,
           target.threshold);

  if amplifying.is_empty() {
    println!("No request reached an amplification factor of {}", target.threshold);
  }
  for result in amplifying {
    println!("{}", result_line(result));
  }

  println!("{}", summary_line(&summarize(results, target.threshold)));
}

#[derive(Debug, Serialize)]
struct JsonResult {
  version: u8,
  mode: u8,
  code: u8,
  name: &'static str,
  implementation: Option<u8>,
  request_length: usize,
  response_length: Option<usize>,
  amplification_factor: Option<f64>,
  timed_out: bool,
  amplifying: bool,
  #[serde(skip_serializing_if = "Option::is_none")]
  request: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  response: Option<String>,
}

#[derive(Debug, Serialize)]
struct JsonReport<'a> {
  host: &'a str,
  address: String,
  port: u16,
  threshold: f64,
  results: Vec<JsonResult>,
}

/// The whole sweep as a JSON document; `with_bytes` adds hex payloads.
pub fn json_report(target: &ProbeTarget,
                   results: &[ProbeResult],
                   with_bytes: bool)
                   -> serde_json::Result<String> {
  let results = results.iter()
    .map(|result| {
      JsonResult {
        version: result.request.version(),
        mode: result.request.mode(),
        code: result.request.code(),
        name: result.request.name(),
        implementation: result.request.implementation(),
        request_length: result.request_size,
        response_length: result.response_size(),
        amplification_factor: result.amplification_factor(),
        timed_out: result.timed_out(),
        amplifying: result.meets(target.threshold),
        request: if with_bytes {
          Some(hex::encode(result.request.payload()))
        } else {
          None
        },
        response: if with_bytes {
          result.response.as_ref().map(hex::encode)
        } else {
          None
        },
      }
    })
    .collect();

  serde_json::to_string_pretty(&JsonReport {
    host: &target.host,
    address: target.addr.ip().to_string(),
    port: target.addr.port(),
    threshold: target.threshold,
    results: results,
  })
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::analyze::analyze;
  use crate::ntp::ProbeRequest;
  use std::time::Duration;

  fn target() -> ProbeTarget {
    ProbeTarget::resolve("127.0.0.1", 123, Duration::from_secs(2), 10.0).unwrap()
  }

  fn results() -> Vec<ProbeResult> {
    vec![ProbeResult {
           request: ProbeRequest::private(2, 3, 42),
           request_size: 12,
           response: Some(vec![0x97; 480]),
         },
         ProbeResult {
           request: ProbeRequest::control(4, 2),
           request_size: 12,
           response: None,
         }]
  }

  #[test]
  fn answered_line() {
    assert_eq!(result_line(&results()[0]),
               "NTPv2 mode 7 impl 3 req 42 (MON_GETLIST_1): 12 -> 480 bytes, amplification factor 40.00");
  }

  #[test]
  fn unanswered_line() {
    assert_eq!(result_line(&results()[1]),
               "NTPv4 mode 6 opcode 2 (READVAR): 12 bytes, no response");
  }

  #[test]
  fn summary_mentions_every_total() {
    let line = summary_line(&summarize(&results(), 10.0));
    assert_eq!(line,
               "2 requests, 1 responses, 1 timeouts, 1 amplifying, largest factor 40.00");
  }

  #[test]
  fn json_document() {
    let doc: serde_json::Value =
      serde_json::from_str(&json_report(&target(), &results(), false).unwrap()).unwrap();
    assert_eq!(doc["host"], "127.0.0.1");
    assert_eq!(doc["port"], 123);
    assert_eq!(doc["threshold"], 10.0);

    let first = &doc["results"][0];
    assert_eq!(first["mode"], 7);
    assert_eq!(first["code"], 42);
    assert_eq!(first["name"], "MON_GETLIST_1");
    assert_eq!(first["implementation"], 3);
    assert_eq!(first["response_length"], 480);
    assert_eq!(first["amplification_factor"], 40.0);
    assert_eq!(first["amplifying"], true);
    assert!(first.get("request").is_none());

    let second = &doc["results"][1];
    assert_eq!(second["timed_out"], true);
    assert!(second["implementation"].is_null());
    assert!(second["response_length"].is_null());
    assert_eq!(second["amplifying"], false);
  }

  #[test]
  fn json_amplifying_flag_follows_the_report() {
    let results = results();
    let doc: serde_json::Value =
      serde_json::from_str(&json_report(&target(), &results, false).unwrap()).unwrap();
    let amplifying = analyze(&results, target().threshold);
    for (i, result) in results.iter().enumerate() {
      let reported = amplifying.iter().any(|&kept| kept == result);
      assert_eq!(doc["results"][i]["amplifying"], reported);
    }
  }

  #[test]
  fn json_document_with_bytes() {
    let doc: serde_json::Value =
      serde_json::from_str(&json_report(&target(), &results(), true).unwrap()).unwrap();
    assert_eq!(doc["results"][0]["request"], "1700032a0000000000000000");
    assert_eq!(doc["results"][1]["request"], "260200000000000000000000");
    assert!(doc["results"][1].get("response").is_none());
  }
}
