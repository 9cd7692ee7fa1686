//! Startup banner with a pastel gradient (BABY-UPDATE).
//! Uses figlet's built-in standard font.

use crossterm::ExecutableCommand;
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use figlet_rs::FIGfont;
use std::io::{Write, stdout};

/// Soft pink (#f7a8c4).
const SOFT_PINK: (u8, u8, u8) = (0xf7, 0xa8, 0xc4);
/// Baby blue (#89cff0).
const BABY_BLUE: (u8, u8, u8) = (0x89, 0xcf, 0xf0);

/// Linear interpolation between two RGB colors. `t` in [0.0, 1.0].
fn lerp_rgb(a: (u8, u8, u8), b: (u8, u8, u8), t: f64) -> (u8, u8, u8) {
    let r = (f64::from(a.0) * (1.0 - t) + f64::from(b.0) * t).round() as u8;
    let g = (f64::from(a.1) * (1.0 - t) + f64::from(b.1) * t).round() as u8;
    let bl = (f64::from(a.2) * (1.0 - t) + f64::from(b.2) * t).round() as u8;
    (r, g, bl)
}

/// ASCII art for `text`, or the plain text if the font cannot render it.
fn render_art(text: &str) -> String {
    FIGfont::standard()
        .ok()
        .and_then(|font| font.convert(text).map(|fig| fig.to_string()))
        .unwrap_or_else(|| text.to_string())
}

/// Prints "BABY-UPDATE" with a top-to-bottom gradient, then version and listen address.
pub fn print_welcome(listen_addr: &str) {
    let mut out = stdout();
    let art = render_art("BABY-UPDATE");
    let lines: Vec<&str> = art.lines().collect();
    let total = lines.len().max(1);

    for (i, line) in lines.iter().enumerate() {
        let t = if total <= 1 {
            1.0
        } else {
            i as f64 / (total - 1) as f64
        };
        let (r, g, b) = lerp_rgb(SOFT_PINK, BABY_BLUE, t);
        let _ = out.execute(SetForegroundColor(Color::Rgb { r, g, b }));
        let _ = out.execute(Print(line));
        let _ = out.execute(Print("\r\n"));
        let _ = out.execute(ResetColor);
    }

    let (r, g, b) = BABY_BLUE;
    let _ = out.execute(SetForegroundColor(Color::Rgb { r, g, b }));
    let _ = out.execute(Print(format!(
        "v{}  http://{}\r\n",
        env!("CARGO_PKG_VERSION"),
        listen_addr
    )));
    let _ = out.execute(ResetColor);
    let _ = out.flush();
}
