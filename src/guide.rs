use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use log::debug;

use crate::download::{download_model, ModelFetcher};
use crate::sources::{mediapipe_source, MANUAL_MODEL_FILENAME, MANUAL_MODEL_URL};

const RULE_WIDTH: usize = 60;

#[derive(Debug, Clone)]
pub struct GuideOptions {
    /// Where downloaded models are written.
    pub dir: PathBuf,
    /// Answer the download prompt with `y` without reading input.
    pub assume_yes: bool,
}

impl Default for GuideOptions {
    fn default() -> Self {
        GuideOptions {
            dir: PathBuf::from("."),
            assume_yes: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Skipped,
    Downloaded(PathBuf),
    Failed,
}

fn rule(out: &mut impl Write, c: char) -> io::Result<()> {
    writeln!(out, "{}", c.to_string().repeat(RULE_WIDTH))
}

/// Reads one answer line. EOF counts as an empty answer; bytes that are not
/// UTF-8 are replaced, so such an answer never matches `y`.
fn read_answer(input: &mut impl BufRead) -> io::Result<String> {
    let mut buf = Vec::new();
    input.read_until(b'\n', &mut buf)?;
    let line = String::from_utf8_lossy(&buf);
    let answer = line.strip_suffix('\n').unwrap_or(&*line);
    let answer = answer.strip_suffix('\r').unwrap_or(answer);
    Ok(answer.to_lowercase())
}

/// Walks through the ways of getting a face model, offering to download
/// the MediaPipe landmarker on the way.
pub fn run(
    mut input: impl BufRead,
    mut out: impl Write,
    fetcher: &dyn ModelFetcher,
    options: &GuideOptions,
) -> io::Result<Outcome> {
    let out = &mut out;

    rule(out, '=')?;
    writeln!(out, "MobileFaceNet Model Downloader")?;
    rule(out, '=')?;

    writeln!(out, "\n⚠️  IMPORTANT:")?;
    writeln!(out, "The original MobileFaceNet_TF repository doesn't provide")?;
    writeln!(out, "a pre-converted TFLite model. You have 3 options:\n")?;

    writeln!(out, "Option 1: Manual Download (RECOMMENDED)")?;
    rule(out, '-')?;
    writeln!(out, "1. Visit: https://github.com/kby-ai/FaceRecognition-Flutter")?;
    writeln!(out, "2. Navigate to: android/app/src/main/assets/")?;
    writeln!(out, "3. Download: mobile_face_net.tflite")?;
    writeln!(out, "4. Save as: {} (in this folder)\n", MANUAL_MODEL_FILENAME)?;

    writeln!(out, "Option 2: Use Alternative Model")?;
    rule(out, '-')?;
    writeln!(out, "Download MediaPipe Face Landmarker (recommended for testing)")?;
    write!(out, "Download MediaPipe model? (y/n): ")?;
    out.flush()?;

    let answer = if options.assume_yes {
        writeln!(out, "y")?;
        String::from("y")
    } else {
        read_answer(&mut input)?
    };
    debug!("download prompt answered {:?}", answer);

    let outcome = if answer == "y" {
        match download_model(fetcher, mediapipe_source(), &options.dir, out)? {
            Some(path) => {
                writeln!(out, "\n✓ Model downloaded!")?;
                writeln!(out, "Note: This is a face detection model, not recognition.")?;
                writeln!(out, "You'll need to modify the code to use it.\n")?;
                Outcome::Downloaded(path)
            }
            None => Outcome::Failed,
        }
    } else {
        Outcome::Skipped
    };

    writeln!(out, "\nOption 3: Convert TensorFlow Model to TFLite")?;
    rule(out, '-')?;
    writeln!(out, "1. Clone: git clone https://github.com/sirius-ai/MobileFaceNet_TF")?;
    writeln!(out, "2. Install TensorFlow: pip install tensorflow")?;
    writeln!(out, "3. Convert using TFLite Converter")?;
    writeln!(out, "4. See: CONVERSION_GUIDE.md (to be created)\n")?;

    rule(out, '=')?;
    writeln!(out, "For now, please manually download the model:")?;
    writeln!(out, "{}", MANUAL_MODEL_URL)?;
    writeln!(out, "\nSave it as: {}", MANUAL_MODEL_FILENAME)?;
    rule(out, '=')?;
    out.flush()?;

    Ok(outcome)
}
