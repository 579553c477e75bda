use std::io::{Read, Write as _};
use std::path::PathBuf;
use std::process::{Child, ChildStdin, Command, Stdio};

use crate::encode::sink::{FrameSink, SinkConfig, check_order, check_size, ensure_parent_dir};
use crate::foundation::core::Rgba8Premul;
use crate::foundation::error::{LoopreelError, LoopreelResult};
use crate::frame::color::Color;
use crate::render::backend::FrameRGBA;
use crate::render::composite::flatten_over_bg;

#[derive(Clone, Debug)]
pub struct FfmpegSinkOpts {
    pub out_path: PathBuf,
    pub overwrite: bool,
    /// Alpha is flattened over this color before encoding.
    pub background: Color,
}

impl FfmpegSinkOpts {
    pub fn new(out_path: impl Into<PathBuf>, background: Color) -> Self {
        Self {
            out_path: out_path.into(),
            overwrite: true,
            background,
        }
    }
}

/// Streams raw RGBA frames into the system `ffmpeg`, producing an H.264 MP4.
pub struct FfmpegSink {
    opts: FfmpegSinkOpts,
    child: Option<Child>,
    stdin: Option<ChildStdin>,
    stderr_drain: Option<std::thread::JoinHandle<std::io::Result<Vec<u8>>>>,
    scratch: Vec<u8>,
    /// Premultiplied copy of straight-alpha input.
    premul: Vec<u8>,
    cfg: Option<SinkConfig>,
    last_idx: Option<u64>,
}

impl FfmpegSink {
    pub fn new(opts: FfmpegSinkOpts) -> Self {
        Self {
            opts,
            child: None,
            stdin: None,
            stderr_drain: None,
            scratch: Vec::new(),
            premul: Vec::new(),
            cfg: None,
            last_idx: None,
        }
    }

    /// Flatten `frame` over the background into `scratch`.
    fn flatten(&mut self, frame: &FrameRGBA) -> LoopreelResult<()> {
        let bg = self.opts.background;
        let bg = [bg.r, bg.g, bg.b];
        if frame.premultiplied {
            return flatten_over_bg(&mut self.scratch, &frame.data, bg);
        }
        self.premul.clear();
        self.premul.extend(
            frame
                .data
                .chunks_exact(4)
                .flat_map(|p| Rgba8Premul::from_straight_rgba(p[0], p[1], p[2], p[3]).to_array()),
        );
        flatten_over_bg(&mut self.scratch, &self.premul, bg)
    }

    /// Stop an encoder that never reached `end`: close stdin, kill and reap the child.
    fn abort(&mut self) {
        drop(self.stdin.take());
        if let Some(mut child) = self.child.take() {
            if let Err(e) = child.kill() {
                tracing::debug!(error = %e, "ffmpeg already exited");
            }
            if let Err(e) = child.wait() {
                tracing::warn!(error = %e, "failed to reap ffmpeg");
            }
            tracing::warn!(out = %self.opts.out_path.display(), "ffmpeg aborted before end");
        }
        if let Some(handle) = self.stderr_drain.take() {
            let _ = handle.join();
        }
        self.cfg = None;
    }
}

impl Drop for FfmpegSink {
    fn drop(&mut self) {
        self.abort();
    }
}

impl FrameSink for FfmpegSink {
    fn begin(&mut self, cfg: SinkConfig) -> LoopreelResult<()> {
        if cfg.fps == 0 {
            return Err(LoopreelError::validation("fps must be non-zero"));
        }
        if cfg.width == 0 || cfg.height == 0 {
            return Err(LoopreelError::validation(
                "ffmpeg sink width/height must be non-zero",
            ));
        }
        if !cfg.width.is_multiple_of(2) || !cfg.height.is_multiple_of(2) {
            return Err(LoopreelError::validation(
                "ffmpeg sink width/height must be even (required for yuv420p mp4 output)",
            ));
        }

        ensure_parent_dir(&self.opts.out_path)?;
        if !self.opts.overwrite && self.opts.out_path.exists() {
            return Err(LoopreelError::validation(format!(
                "output file '{}' already exists",
                self.opts.out_path.display()
            )));
        }
        if !is_ffmpeg_on_path() {
            return Err(LoopreelError::encode(
                "ffmpeg is required for MP4 encoding, but was not found on PATH",
            ));
        }

        let mut cmd = Command::new("ffmpeg");
        cmd.stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::piped());
        cmd.arg(if self.opts.overwrite { "-y" } else { "-n" });
        cmd.args([
            "-loglevel",
            "error",
            "-f",
            "rawvideo",
            "-pix_fmt",
            "rgba",
            "-s",
            &format!("{}x{}", cfg.width, cfg.height),
            "-r",
            &cfg.fps.to_string(),
            "-i",
            "pipe:0",
            "-an",
            "-c:v",
            "libx264",
            "-pix_fmt",
            "yuv420p",
            "-movflags",
            "+faststart",
        ]);
        cmd.arg(&self.opts.out_path);

        let mut child = cmd.spawn().map_err(|e| {
            LoopreelError::encode(format!(
                "failed to spawn ffmpeg (is it installed and on PATH?): {e}"
            ))
        })?;
        let stdin = child
            .stdin
            .take()
            .ok_or_else(|| LoopreelError::encode("failed to open ffmpeg stdin"))?;
        let mut stderr = child
            .stderr
            .take()
            .ok_or_else(|| LoopreelError::encode("failed to open ffmpeg stderr"))?;
        let stderr_drain = std::thread::spawn(move || {
            let mut bytes = Vec::new();
            stderr.read_to_end(&mut bytes)?;
            Ok(bytes)
        });

        tracing::debug!(
            out = %self.opts.out_path.display(),
            width = cfg.width,
            height = cfg.height,
            fps = cfg.fps,
            "ffmpeg started"
        );
        self.scratch = vec![0u8; cfg.width as usize * cfg.height as usize * 4];
        self.child = Some(child);
        self.stdin = Some(stdin);
        self.stderr_drain = Some(stderr_drain);
        self.cfg = Some(cfg);
        self.last_idx = None;
        Ok(())
    }

    fn push_frame(&mut self, idx: u64, frame: &FrameRGBA) -> LoopreelResult<()> {
        let cfg = self
            .cfg
            .as_ref()
            .ok_or_else(|| LoopreelError::encode("ffmpeg sink not started"))?;
        check_order(self.last_idx, idx)?;
        check_size(cfg, frame)?;
        self.last_idx = Some(idx);

        self.flatten(frame)?;

        let Some(stdin) = self.stdin.as_mut() else {
            return Err(LoopreelError::encode("ffmpeg sink is already finalized"));
        };
        stdin.write_all(&self.scratch).map_err(|e| {
            LoopreelError::encode(format!("failed to write frame to ffmpeg stdin: {e}"))
        })?;
        Ok(())
    }

    fn end(&mut self) -> LoopreelResult<()> {
        drop(self.stdin.take());
        let mut child = self
            .child
            .take()
            .ok_or_else(|| LoopreelError::encode("ffmpeg sink not started"))?;
        let status = child
            .wait()
            .map_err(|e| LoopreelError::encode(format!("failed to wait for ffmpeg: {e}")))?;
        let stderr_bytes = match self.stderr_drain.take() {
            Some(handle) => handle
                .join()
                .map_err(|_| LoopreelError::encode("ffmpeg stderr drain thread panicked"))?
                .map_err(|e| LoopreelError::encode(format!("ffmpeg stderr read failed: {e}")))?,
            None => Vec::new(),
        };
        if !status.success() {
            let stderr = String::from_utf8_lossy(&stderr_bytes);
            return Err(LoopreelError::encode(format!(
                "ffmpeg exited with status {status}: {}",
                stderr.trim()
            )));
        }
        self.cfg = None;
        tracing::debug!(out = %self.opts.out_path.display(), "ffmpeg finished");
        Ok(())
    }
}

impl std::fmt::Debug for FfmpegSink {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FfmpegSink")
            .field("opts", &self.opts)
            .field("running", &self.child.is_some())
            .field("last_idx", &self.last_idx)
            .finish()
    }
}

/// `true` when `ffmpeg` can be invoked from `PATH`.
pub fn is_ffmpeg_on_path() -> bool {
    Command::new("ffmpeg")
        .arg("-version")
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .map(|s| s.success())
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn odd_dimensions_are_rejected_before_spawning() {
        let mut sink = FfmpegSink::new(FfmpegSinkOpts::new(
            std::env::temp_dir().join("loopreel_odd.mp4"),
            Color::hex(0x000000),
        ));
        let err = sink
            .begin(SinkConfig {
                width: 11,
                height: 10,
                fps: 30,
                frames: 1,
            })
            .unwrap_err();
        assert!(err.to_string().contains("even"));
    }

    /// A sink wired to `program` in place of ffmpeg, as if `begin` had succeeded.
    #[cfg(unix)]
    fn attached(program: &str, args: &[&str], cfg: SinkConfig) -> (FfmpegSink, u32) {
        let mut child = Command::new(program)
            .args(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .spawn()
            .unwrap();
        let pid = child.id();
        let mut sink = FfmpegSink::new(FfmpegSinkOpts::new("unused.mp4", Color::hex(0x000000)));
        sink.stdin = child.stdin.take();
        sink.child = Some(child);
        sink.scratch = vec![0u8; cfg.width as usize * cfg.height as usize * 4];
        sink.cfg = Some(cfg);
        (sink, pid)
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn dropping_an_unfinished_sink_reaps_the_encoder() {
        let cfg = SinkConfig {
            width: 2,
            height: 2,
            fps: 30,
            frames: 4,
        };
        let (mut sink, pid) = attached("sleep", &["30"], cfg);
        let bad = FrameRGBA::new(4, 4, None);
        assert!(sink.push_frame(0, &bad).is_err());
        drop(sink);
        assert!(!std::path::Path::new(&format!("/proc/{pid}")).exists());
    }

    #[cfg(unix)]
    #[test]
    fn straight_alpha_frames_reuse_the_premultiply_buffer() {
        let cfg = SinkConfig {
            width: 2,
            height: 2,
            fps: 30,
            frames: 2,
        };
        let (mut sink, _) = attached("cat", &[], cfg);
        let mut frame = FrameRGBA::new(2, 2, None);
        frame.premultiplied = false;
        frame.data = [200, 100, 0, 128].repeat(4);

        sink.push_frame(0, &frame).unwrap();
        let buffer = sink.premul.as_ptr();
        assert_eq!(&sink.premul[..4], &[100, 50, 0, 128]);
        assert_eq!(&sink.scratch[..4], &[100, 50, 0, 255]);

        sink.push_frame(1, &frame).unwrap();
        assert_eq!(sink.premul.as_ptr(), buffer);
        sink.end().unwrap();
    }

    #[test]
    fn push_before_begin_fails() {
        let mut sink = FfmpegSink::new(FfmpegSinkOpts::new("unused.mp4", Color::hex(0)));
        assert!(sink.push_frame(0, &FrameRGBA::new(2, 2, None)).is_err());
    }
}
