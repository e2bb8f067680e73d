//! 試聴再生（houndでデコードし、cpalの既定出力デバイスで鳴らす）

use std::io::Cursor;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use anyhow::{anyhow, Context, Result};
use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use cpal::{FromSample, SizedSample};

/// デコード済みPCM（インターリーブ、-1.0..=1.0）
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedClip {
    pub channels: u16,
    pub sample_rate: u32,
    pub samples: Vec<f32>,
}

impl DecodedClip {
    pub fn frames(&self) -> usize {
        if self.channels == 0 {
            return 0;
        }
        self.samples.len() / self.channels as usize
    }

    pub fn duration_secs(&self) -> f32 {
        if self.sample_rate == 0 {
            return 0.0;
        }
        self.frames() as f32 / self.sample_rate as f32
    }

    /// 出力側のフレーム位置 `pos`（入力フレーム単位、小数）の値を線形補間で取る
    fn sample_at(&self, pos: f64, out_channel: usize) -> f32 {
        let channels = self.channels as usize;
        let src_channel = out_channel.min(channels - 1);
        let frame = pos.floor() as usize;
        let frac = (pos - frame as f64) as f32;
        let a = self.samples[frame * channels + src_channel];
        let b = if frame + 1 < self.frames() {
            self.samples[(frame + 1) * channels + src_channel]
        } else {
            a
        };
        a + (b - a) * frac
    }
}

pub fn decode_wav(bytes: &[u8]) -> Result<DecodedClip> {
    let mut reader = hound::WavReader::new(Cursor::new(bytes)).context("read WAV header")?;
    let spec = reader.spec();
    if spec.channels == 0 {
        return Err(anyhow!("WAV has no channels"));
    }

    let samples: Vec<f32> = match spec.sample_format {
        hound::SampleFormat::Float => reader
            .samples::<f32>()
            .collect::<std::result::Result<_, _>>()
            .context("decode float samples")?,
        hound::SampleFormat::Int => {
            let scale = 1.0 / (1u64 << (spec.bits_per_sample.max(1) - 1)) as f32;
            reader
                .samples::<i32>()
                .map(|s| s.map(|v| v as f32 * scale))
                .collect::<std::result::Result<_, _>>()
                .context("decode integer samples")?
        }
    };

    Ok(DecodedClip {
        channels: spec.channels,
        sample_rate: spec.sample_rate,
        samples,
    })
}

/// 出力バッファを埋める。最後まで再生したら残りを無音にして `false` を返す
pub fn fill_output<T>(
    clip: &DecodedClip,
    pos: &mut f64,
    step: f64,
    out_channels: usize,
    data: &mut [T],
) -> bool
where
    T: SizedSample + FromSample<f32>,
{
    let total = clip.frames() as f64;
    let mut playing = true;
    for frame in data.chunks_mut(out_channels) {
        if *pos >= total || clip.channels == 0 {
            playing = false;
            for out in frame.iter_mut() {
                *out = T::EQUILIBRIUM;
            }
            continue;
        }
        for (ch, out) in frame.iter_mut().enumerate() {
            *out = T::from_sample(clip.sample_at(*pos, ch));
        }
        *pos += step;
    }
    playing
}

/// 再生中のストリーム
pub struct Player {
    stream: Option<cpal::Stream>,
    finished: Arc<AtomicBool>,
    filename: String,
    duration_secs: f32,
}

impl Default for Player {
    fn default() -> Self {
        Self {
            stream: None,
            finished: Arc::new(AtomicBool::new(true)),
            filename: String::new(),
            duration_secs: 0.0,
        }
    }
}

impl Player {
    pub fn is_playing(&self) -> bool {
        self.stream.is_some() && !self.finished.load(Ordering::Relaxed)
    }

    /// 再生中表示（例: `▶ a.wav (1.5s)`）
    pub fn now_playing(&self) -> String {
        format!("▶ {} ({:.1}s)", self.filename, self.duration_secs)
    }

    pub fn stop(&mut self) {
        self.stream = None;
        self.finished.store(true, Ordering::Relaxed);
    }

    pub fn play(&mut self, filename: &str, bytes: &[u8]) -> Result<()> {
        self.stop();
        let clip = Arc::new(decode_wav(bytes)?);
        let duration_secs = clip.duration_secs();

        let host = cpal::default_host();
        let device = host
            .default_output_device()
            .ok_or_else(|| anyhow!("no audio output device"))?;
        let supported = device.default_output_config()?;
        let sample_format = supported.sample_format();
        let config: cpal::StreamConfig = supported.into();

        let finished = Arc::new(AtomicBool::new(false));
        let stream = match sample_format {
            cpal::SampleFormat::F32 => build_stream::<f32>(&device, &config, clip, finished.clone())?,
            cpal::SampleFormat::I16 => build_stream::<i16>(&device, &config, clip, finished.clone())?,
            cpal::SampleFormat::U16 => build_stream::<u16>(&device, &config, clip, finished.clone())?,
            other => return Err(anyhow!("unsupported output sample format: {other:?}")),
        };
        stream.play()?;

        tracing::info!("playing {}", filename);
        self.stream = Some(stream);
        self.finished = finished;
        self.filename = filename.to_string();
        self.duration_secs = duration_secs;
        Ok(())
    }
}

fn build_stream<T>(
    device: &cpal::Device,
    config: &cpal::StreamConfig,
    clip: Arc<DecodedClip>,
    finished: Arc<AtomicBool>,
) -> Result<cpal::Stream>
where
    T: SizedSample + FromSample<f32>,
{
    let out_channels = config.channels as usize;
    let step = clip.sample_rate as f64 / config.sample_rate.0 as f64;
    let mut pos = 0.0f64;

    let stream = device.build_output_stream(
        config,
        move |data: &mut [T], _: &cpal::OutputCallbackInfo| {
            if !fill_output(&clip, &mut pos, step, out_channels, data) {
                finished.store(true, Ordering::Relaxed);
            }
        },
        |err| tracing::warn!("audio stream error: {}", err),
        None,
    )?;
    Ok(stream)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wav_bytes(channels: u16, samples: &[i16]) -> Vec<u8> {
        let spec = hound::WavSpec {
            channels,
            sample_rate: 4,
            bits_per_sample: 16,
            sample_format: hound::SampleFormat::Int,
        };
        let mut cursor = Cursor::new(Vec::new());
        {
            let mut writer = hound::WavWriter::new(&mut cursor, spec).unwrap();
            for &s in samples {
                writer.write_sample(s).unwrap();
            }
            writer.finalize().unwrap();
        }
        cursor.into_inner()
    }

    #[test]
    fn test_decode_wav_scales_samples() {
        let clip = decode_wav(&wav_bytes(1, &[0, 16384, -32768, 0])).unwrap();
        assert_eq!(clip.channels, 1);
        assert_eq!(clip.frames(), 4);
        assert_eq!(clip.samples, vec![0.0, 0.5, -1.0, 0.0]);
        assert!((clip.duration_secs() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_now_playing_shows_duration() {
        let clip = decode_wav(&wav_bytes(2, &[0; 12])).unwrap();
        let player = Player {
            filename: "take1.wav".to_string(),
            duration_secs: clip.duration_secs(),
            ..Player::default()
        };
        assert_eq!(player.now_playing(), "▶ take1.wav (1.5s)");
        assert!(!player.is_playing());
    }

    #[test]
    fn test_decode_rejects_garbage() {
        assert!(decode_wav(b"definitely not a wav").is_err());
    }

    #[test]
    fn test_fill_output_mono_to_stereo() {
        let clip = decode_wav(&wav_bytes(1, &[16384, -16384])).unwrap();
        let mut pos = 0.0;
        let mut out = [0.0f32; 6];

        let playing = fill_output(&clip, &mut pos, 1.0, 2, &mut out);
        assert!(!playing);
        assert_eq!(out, [0.5, 0.5, -0.5, -0.5, 0.0, 0.0]);
    }

    #[test]
    fn test_fill_output_interpolates() {
        let clip = decode_wav(&wav_bytes(1, &[0, 16384])).unwrap();
        let mut pos = 0.0;
        let mut out = [0.0f32; 2];

        assert!(fill_output(&clip, &mut pos, 0.5, 1, &mut out));
        assert_eq!(out, [0.0, 0.25]);
        assert!((pos - 1.0).abs() < 1e-9);
    }
}
