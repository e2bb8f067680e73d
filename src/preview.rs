//! 試聴ファイルの情報表示（CLIでは再生しない）

use crate::error::Result;
use audio_qa_common::PreviewClip;
use std::io::Cursor;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WavInfo {
    pub channels: u16,
    pub sample_rate: u32,
    pub bits_per_sample: u16,
    pub frames: u32,
}

impl WavInfo {
    pub fn duration_secs(&self) -> f64 {
        if self.sample_rate == 0 {
            return 0.0;
        }
        self.frames as f64 / self.sample_rate as f64
    }
}

/// 読み込んだバイト列からWAVヘッダを解析
pub fn wav_info(clip: &PreviewClip) -> Result<WavInfo> {
    let reader = hound::WavReader::new(Cursor::new(clip.bytes.as_slice()))?;
    let spec = reader.spec();
    Ok(WavInfo {
        channels: spec.channels,
        sample_rate: spec.sample_rate,
        bits_per_sample: spec.bits_per_sample,
        frames: reader.duration(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AudioQaError;
    use std::path::PathBuf;

    fn wav_bytes(frames: u32) -> Vec<u8> {
        let spec = hound::WavSpec {
            channels: 1,
            sample_rate: 8000,
            bits_per_sample: 16,
            sample_format: hound::SampleFormat::Int,
        };
        let mut cursor = Cursor::new(Vec::new());
        {
            let mut writer = hound::WavWriter::new(&mut cursor, spec).unwrap();
            for i in 0..frames {
                writer.write_sample((i % 100) as i16).unwrap();
            }
            writer.finalize().unwrap();
        }
        cursor.into_inner()
    }

    fn clip(bytes: Vec<u8>) -> PreviewClip {
        PreviewClip {
            filename: "a.wav".into(),
            path: PathBuf::from("/tmp/a.wav"),
            bytes,
        }
    }

    #[test]
    fn test_wav_info() {
        let info = wav_info(&clip(wav_bytes(4000))).unwrap();
        assert_eq!(info.channels, 1);
        assert_eq!(info.sample_rate, 8000);
        assert_eq!(info.frames, 4000);
        assert!((info.duration_secs() - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_not_a_wav() {
        let err = wav_info(&clip(b"not audio".to_vec())).unwrap_err();
        assert!(matches!(err, AudioQaError::WavHeader(_)));
    }
}
