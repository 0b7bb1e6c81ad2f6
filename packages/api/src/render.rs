//! Stdout framing of a `FetchOutcome`
//!
//! The byte layout here is an external contract and is reproduced exactly,
//! including the odd "Total response bytes" accounting and the leading space
//! on the cache-hit variant of that line.

use std::io::{self, Write};

use webcache_client::FetchOutcome;

pub const CACHE_BANNER: &str = "File is given from local filesystem\n";
pub const SYNTHETIC_STATUS: &str = "HTTP/1.0 200 OK\r\n";

/// Write the framing for `outcome` to `out`.
///
/// # Errors
///
/// Propagates write errors from `out`.
pub fn write_outcome<W: Write>(outcome: &FetchOutcome, out: &mut W) -> io::Result<()> {
    match outcome {
        FetchOutcome::CacheHit { entry, .. } => {
            let header = format!("Content-Length: {}\r\n\r\n", entry.len());
            out.write_all(CACHE_BANNER.as_bytes())?;
            out.write_all(SYNTHETIC_STATUS.as_bytes())?;
            out.write_all(header.as_bytes())?;
            out.write_all(entry.body())?;

            let total = SYNTHETIC_STATUS.len() + header.len() + entry.len();
            write!(out, "\n Total response bytes: {total}\n")
        }
        FetchOutcome::Fetched {
            request, response, ..
        } => {
            write_request_dump(request, out)?;
            out.write_all(response.status_line())?;
            out.write_all(b"\n")?;
            out.write_all(SYNTHETIC_STATUS.as_bytes())?;
            if let Some(body) = response.body() {
                out.write_all(body)?;
            }
            write!(out, "\nTotal response bytes: {}\n", response.accounted_bytes())
        }
        FetchOutcome::UpstreamError {
            request, response, ..
        } => {
            write_request_dump(request, out)?;
            out.write_all(response.status_line())?;
            out.write_all(b"\n")
        }
        FetchOutcome::Empty { request, .. } => write_request_dump(request, out),
    }
}

fn write_request_dump<W: Write>(
    request: &webcache_client::HttpRequest,
    out: &mut W,
) -> io::Result<()> {
    write!(out, "HTTP request =\n{request}\nLEN = {}\n", request.len())
}
