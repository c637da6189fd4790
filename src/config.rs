use std::{error, fmt, io};
use std::fs::File;
use std::io::prelude::*;
use std::path::Path;
use std::str::FromStr;
use crate::ntp;
use crate::probe::ProbePlan;

#[derive(Debug)]
/// Combined error type for configuration errors.
pub enum ConfigError {
  Io(io::Error),
  Parse(toml::de::Error),
  Invalid(String),
}

impl fmt::Display for ConfigError {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    match *self {
      ConfigError::Io(ref err) => write!(f, "Couldn't read config: {}", err),
      ConfigError::Parse(ref err) => write!(f, "Couldn't parse config: {}", err),
      ConfigError::Invalid(ref msg) => write!(f, "Invalid config: {}", msg),
    }
  }
}

impl error::Error for ConfigError {
  fn source(&self) -> Option<&(dyn error::Error + 'static)> {
    match *self {
      ConfigError::Io(ref err) => Some(err),
      ConfigError::Parse(ref err) => Some(err),
      ConfigError::Invalid(_) => None,
    }
  }
}

impl From<io::Error> for ConfigError {
  fn from(err: io::Error) -> ConfigError {
    ConfigError::Io(err)
  }
}

impl From<toml::de::Error> for ConfigError {
  fn from(err: toml::de::Error) -> ConfigError {
    ConfigError::Parse(err)
  }
}

#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
/// Configuration relating to which queries are sent.
pub struct Probe {
  pub versions: Vec<u8>,
  pub mode6_opcodes: Vec<u8>,
  pub mode7_implementations: Vec<u8>,
  pub mode7_req_codes: Vec<u8>,
}

impl Default for Probe {
  fn default() -> Probe {
    Probe {
      versions: ntp::VERSIONS.to_vec(),
      mode6_opcodes: ntp::CURATED_OPCODES.to_vec(),
      mode7_implementations: ntp::IMPLEMENTATIONS.to_vec(),
      mode7_req_codes: ntp::CURATED_REQ_CODES.to_vec(),
    }
  }
}

impl Probe {
  /// Check every configured value against what fits on the wire.
  fn validate(&self) -> Result<(), ConfigError> {
    check_set("versions", &self.versions, |v| {
      (ntp::MIN_VERSION..=ntp::MAX_VERSION).contains(&v)
    })?;
    check_set("mode6_opcodes", &self.mode6_opcodes, |op| op <= ntp::MAX_OPCODE)?;
    check_set("mode7_implementations",
              &self.mode7_implementations,
              |imp| ntp::IMPLEMENTATIONS.contains(&imp))?;
    check_set("mode7_req_codes", &self.mode7_req_codes, |code| {
      code <= ntp::MAX_REQ_CODE
    })
  }

  /// The sweep described by this configuration.
  pub fn plan(&self) -> ProbePlan {
    ProbePlan {
      versions: self.versions.clone(),
      opcodes: self.mode6_opcodes.clone(),
      implementations: self.mode7_implementations.clone(),
      req_codes: self.mode7_req_codes.clone(),
    }
  }
}

fn check_set<F: Fn(u8) -> bool>(key: &str, values: &[u8], valid: F) -> Result<(), ConfigError> {
  if values.is_empty() {
    return Err(ConfigError::Invalid(format!("probe.{} is empty", key)));
  }

  match values.iter().find(|&&value| !valid(value)) {
    Some(value) => Err(ConfigError::Invalid(format!("probe.{} contains out of range value {}", key, value))),
    None => Ok(()),
  }
}

#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
/// Configuration relating to the logging subsystem.
pub struct Log {
  pub level: String,
  pub file: Option<String>,
}

impl Log {
  /// The configured level as a filter.
  pub fn level_filter(&self) -> Result<log::LevelFilter, ConfigError> {
    log::LevelFilter::from_str(self.level.as_ref()).map_err(|_| {
      ConfigError::Invalid(format!("log.level {:?} isn't one of off, error, warn, info, debug, trace",
                                   self.level))
    })
  }
}

impl Default for Log {
  fn default() -> Log {
    Log {
      level: "warn".to_owned(),
      file: None,
    }
  }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
/// General configuration superstructure.
pub struct Config {
  /// Configuration relating to which queries are sent.
  pub probe: Probe,
  /// Configuration relating to the logging subsystem.
  pub log: Log,
}

impl Config {
  /// Read configuration from a file.
  pub fn read<P: AsRef<Path>>(filename: P) -> Result<Config, ConfigError> {
    let mut config_text = String::new();
    File::open(filename)?.read_to_string(&mut config_text)?;
    Config::parse(config_text.as_ref())
  }

  /// Parse and validate configuration text.
  pub fn parse(text: &str) -> Result<Config, ConfigError> {
    let config: Config = toml::from_str(text)?;
    config.probe.validate()?;
    config.log.level_filter()?;
    Ok(config)
  }
}
