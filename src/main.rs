//! Host-side preview: `cargo run` builds the wasm bundle into `static/pkg`
//! and serves `static/` locally.

use std::process::{Command, ExitCode, Stdio};

const PORT: &str = "8000";

fn main() -> ExitCode {
    println!("Building WASM pkg …");
    match Command::new("wasm-pack")
        .args(["build", "--dev", "--target", "web", "--out-dir", "static/pkg"])
        .status()
    {
        Ok(st) if st.success() => {}
        Ok(_) => {
            eprintln!("wasm-pack finished with errors");
            return ExitCode::FAILURE;
        }
        Err(_) => {
            eprintln!("wasm-pack not found in PATH; serving whatever is already in static/pkg");
        }
    }

    println!("Serving the page at http://127.0.0.1:{PORT} (Ctrl-C to stop)");
    let status = Command::new("python3")
        .args(["-m", "http.server", PORT, "--bind", "127.0.0.1", "--directory", "static"])
        .stdout(Stdio::null())
        .status();

    match status {
        Ok(st) if st.success() => ExitCode::SUCCESS,
        Ok(_) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("failed to start http server: {e}");
            ExitCode::FAILURE
        }
    }
}
