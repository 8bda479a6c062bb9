use std::net::{Ipv4Addr, SocketAddr};

use clap::Parser;

pub const DEFAULT_PORT: u16 = 80;

/// Command line configuration.
#[derive(Debug, Clone, Parser)]
#[command(name = "tallyhttp")]
#[command(about = "Minimal concurrent HTTP server with request stats")]
pub struct Config {
    /// Port to listen on
    #[arg(
        short,
        long,
        default_value_t = DEFAULT_PORT,
        value_parser = parse_port,
        allow_hyphen_values = true
    )]
    pub port: u16,
}

impl Config {
    pub fn load() -> Self {
        Self::parse()
    }

    /// Address the server binds to: every interface on the configured port.
    pub fn listen_addr(&self) -> SocketAddr {
        SocketAddr::from((Ipv4Addr::UNSPECIFIED, self.port))
    }
}

/// Lenient port parsing: leading whitespace, an optional sign and the longest
/// digit run. Anything unparsable becomes 0 and the result is truncated to 16
/// bits. Never rejects input.
pub fn parse_port(s: &str) -> Result<u16, std::convert::Infallible> {
    let s = s.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let value = digits
        .bytes()
        .take_while(u8::is_ascii_digit)
        .fold(0i64, |acc, d| {
            acc.wrapping_mul(10).wrapping_add(i64::from(d - b'0'))
        });

    let value = if negative { value.wrapping_neg() } else { value };
    Ok(value as u16)
}
