use crate::error::{DaybookError, Result};
use std::process::Command;

/// Text exchange with a clipboard.
///
/// The editing session is generic over this trait so the engine can be
/// exercised without a windowing system; [`SystemClipboard`] talks to the OS,
/// [`MemoryClipboard`] keeps everything in-process.
pub trait Clipboard {
    fn write_text(&mut self, text: &str) -> Result<()>;
    fn read_text(&mut self) -> Result<String>;
}

/// The OS clipboard, driven through external tools.
/// - macOS: uses pbcopy / pbpaste
/// - Linux: uses xclip or xsel
/// - Windows: uses clip.exe / PowerShell Get-Clipboard
#[derive(Debug, Default)]
pub struct SystemClipboard;

impl SystemClipboard {
    pub fn new() -> Self {
        Self
    }
}

impl Clipboard for SystemClipboard {
    fn write_text(&mut self, text: &str) -> Result<()> {
        copy_to_clipboard(text)
    }

    fn read_text(&mut self) -> Result<String> {
        paste_from_clipboard()
    }
}

/// An in-process clipboard with no OS involvement.
///
/// Reading never fails and yields the last written text, or an empty string.
#[derive(Debug, Default, Clone)]
pub struct MemoryClipboard {
    contents: String,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Clipboard for MemoryClipboard {
    fn write_text(&mut self, text: &str) -> Result<()> {
        self.contents = text.to_string();
        Ok(())
    }

    fn read_text(&mut self) -> Result<String> {
        Ok(self.contents.clone())
    }
}

fn copy_to_clipboard(text: &str) -> Result<()> {
    #[cfg(target_os = "macos")]
    {
        copy_macos(text)
    }

    #[cfg(target_os = "linux")]
    {
        copy_linux(text)
    }

    #[cfg(target_os = "windows")]
    {
        copy_windows(text)
    }

    #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
    {
        let _ = text;
        Err(DaybookError::Clipboard(
            "Clipboard not supported on this platform".to_string(),
        ))
    }
}

fn paste_from_clipboard() -> Result<String> {
    #[cfg(target_os = "macos")]
    {
        paste_macos()
    }

    #[cfg(target_os = "linux")]
    {
        paste_linux()
    }

    #[cfg(target_os = "windows")]
    {
        paste_windows()
    }

    #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
    {
        Err(DaybookError::Clipboard(
            "Clipboard not supported on this platform".to_string(),
        ))
    }
}

#[cfg(target_os = "macos")]
fn copy_macos(text: &str) -> Result<()> {
    use std::io::Write;
    use std::process::Stdio;

    let mut child = Command::new("pbcopy")
        .stdin(Stdio::piped())
        .spawn()
        .map_err(|e| DaybookError::Clipboard(format!("Failed to spawn pbcopy: {}", e)))?;

    if let Some(mut stdin) = child.stdin.take() {
        stdin
            .write_all(text.as_bytes())
            .map_err(|e| DaybookError::Clipboard(format!("Failed to write to pbcopy: {}", e)))?;
    }

    let status = child
        .wait()
        .map_err(|e| DaybookError::Clipboard(format!("Failed to wait for pbcopy: {}", e)))?;

    if status.success() {
        Ok(())
    } else {
        Err(DaybookError::Clipboard(
            "pbcopy exited with error".to_string(),
        ))
    }
}

#[cfg(target_os = "macos")]
fn paste_macos() -> Result<String> {
    let output = Command::new("pbpaste")
        .output()
        .map_err(|e| DaybookError::Clipboard(format!("Failed to spawn pbpaste: {}", e)))?;

    if output.status.success() {
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    } else {
        Err(DaybookError::Clipboard(
            "pbpaste exited with error".to_string(),
        ))
    }
}

#[cfg(target_os = "linux")]
fn copy_linux(text: &str) -> Result<()> {
    use std::io::Write;
    use std::process::Stdio;

    // Try xclip first, then xsel
    let result = Command::new("xclip")
        .args(["-selection", "clipboard"])
        .stdin(Stdio::piped())
        .spawn();

    let mut child = match result {
        Ok(child) => child,
        Err(_) => Command::new("xsel")
            .args(["--clipboard", "--input"])
            .stdin(Stdio::piped())
            .spawn()
            .map_err(|e| {
                DaybookError::Clipboard(format!(
                    "Failed to spawn xclip or xsel: {}. Install xclip or xsel.",
                    e
                ))
            })?,
    };

    if let Some(mut stdin) = child.stdin.take() {
        stdin
            .write_all(text.as_bytes())
            .map_err(|e| DaybookError::Clipboard(format!("Failed to write to clipboard: {}", e)))?;
    }

    let status = child
        .wait()
        .map_err(|e| DaybookError::Clipboard(format!("Failed to wait for clipboard command: {}", e)))?;

    if status.success() {
        Ok(())
    } else {
        Err(DaybookError::Clipboard(
            "Clipboard command exited with error".to_string(),
        ))
    }
}

#[cfg(target_os = "linux")]
fn paste_linux() -> Result<String> {
    // Same tool order as the copy path.
    let output = Command::new("xclip")
        .args(["-selection", "clipboard", "-o"])
        .output()
        .or_else(|_| {
            Command::new("xsel")
                .args(["--clipboard", "--output"])
                .output()
        })
        .map_err(|e| {
            DaybookError::Clipboard(format!(
                "Failed to spawn xclip or xsel: {}. Install xclip or xsel.",
                e
            ))
        })?;

    if output.status.success() {
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    } else {
        Err(DaybookError::Clipboard(
            "Clipboard command exited with error".to_string(),
        ))
    }
}

#[cfg(target_os = "windows")]
fn copy_windows(text: &str) -> Result<()> {
    use std::io::Write;
    use std::process::Stdio;

    let mut child = Command::new("clip")
        .stdin(Stdio::piped())
        .spawn()
        .map_err(|e| DaybookError::Clipboard(format!("Failed to spawn clip: {}", e)))?;

    if let Some(mut stdin) = child.stdin.take() {
        stdin
            .write_all(text.as_bytes())
            .map_err(|e| DaybookError::Clipboard(format!("Failed to write to clip: {}", e)))?;
    }

    let status = child
        .wait()
        .map_err(|e| DaybookError::Clipboard(format!("Failed to wait for clip: {}", e)))?;

    if status.success() {
        Ok(())
    } else {
        Err(DaybookError::Clipboard("clip exited with error".to_string()))
    }
}

#[cfg(target_os = "windows")]
fn paste_windows() -> Result<String> {
    let output = Command::new("powershell")
        .args(["-NoProfile", "-Command", "Get-Clipboard -Raw"])
        .output()
        .map_err(|e| DaybookError::Clipboard(format!("Failed to spawn powershell: {}", e)))?;

    if output.status.success() {
        let mut text = String::from_utf8_lossy(&output.stdout).into_owned();
        // Get-Clipboard terminates its output with a CRLF of its own.
        if text.ends_with("\r\n") {
            text.truncate(text.len() - 2);
        }
        Ok(text)
    } else {
        Err(DaybookError::Clipboard(
            "Get-Clipboard exited with error".to_string(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_clipboard_round_trip() {
        let mut clip = MemoryClipboard::new();
        clip.write_text("carried across").unwrap();
        assert_eq!(clip.read_text().unwrap(), "carried across");
    }

    #[test]
    fn test_memory_clipboard_starts_empty() {
        let mut clip = MemoryClipboard::new();
        assert_eq!(clip.read_text().unwrap(), "");
    }

    #[test]
    fn test_memory_clipboard_overwrites() {
        let mut clip = MemoryClipboard::new();
        clip.write_text("first").unwrap();
        clip.write_text("second").unwrap();
        assert_eq!(clip.read_text().unwrap(), "second");
    }
}
