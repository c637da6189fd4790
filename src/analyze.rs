use crate::probe::ProbeResult;

/// Response bytes per request byte.
pub fn amplification_factor(request_size: usize, response_size: usize) -> f64 {
  response_size as f64 / request_size as f64
}

/// The answered results amplifying by at least `threshold`, in probe order.
pub fn analyze(results: &[ProbeResult], threshold: f64) -> Vec<&ProbeResult> {
  results.iter()
    .filter(|result| result.meets(threshold))
    .collect()
}

#[derive(Debug, Clone, PartialEq)]
/// Totals over one sweep.
pub struct Summary {
  pub probes: usize,
  pub responses: usize,
  pub timeouts: usize,
  /// Results at or above the threshold
  pub amplifying: usize,
  /// Largest factor seen, if anything answered
  pub max_factor: Option<f64>,
}

pub fn summarize(results: &[ProbeResult], threshold: f64) -> Summary {
  let responses = results.iter().filter(|result| !result.timed_out()).count();
  let max_factor = results.iter()
    .filter_map(ProbeResult::amplification_factor)
    .fold(None, |max: Option<f64>, factor| Some(max.map_or(factor, |max| max.max(factor))));

  Summary {
    probes: results.len(),
    responses: responses,
    timeouts: results.len() - responses,
    amplifying: analyze(results, threshold).len(),
    max_factor: max_factor,
  }
}
