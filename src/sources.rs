use std::path::{Path, PathBuf};

/// A known location a face model can be fetched from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModelSource {
    pub name: &'static str,
    pub url: &'static str,
    pub filename: &'static str,
    pub note: &'static str,
}

impl ModelSource {
    pub fn destination(&self, dir: &Path) -> PathBuf {
        dir.join(self.filename)
    }
}

pub const MODEL_SOURCES: [ModelSource; 2] = [
    ModelSource {
        name: "FaceNet MobileNet (Recommended)",
        url: "https://github.com/sirius-ai/MobileFaceNet_TF/raw/master/arch/pretrained_model/MobileFaceNet_9925_9680.ckpt.data-00000-of-00001",
        filename: "mobilefacenet_checkpoint.data",
        note: "Needs conversion to TFLite",
    },
    ModelSource {
        name: "Alternative - Use pre-converted model",
        url: "https://storage.googleapis.com/mediapipe-models/face_landmarker/face_landmarker/float16/latest/face_landmarker.task",
        filename: "face_landmarker.task",
        note: "MediaPipe model",
    },
];

/// Pre-converted TFLite model that has to be fetched by hand.
pub const MANUAL_MODEL_URL: &str =
    "https://github.com/kby-ai/FaceRecognition-Flutter/raw/main/android/app/src/main/assets/mobile_face_net.tflite";
pub const MANUAL_MODEL_FILENAME: &str = "mobilefacenet.tflite";

/// The source offered for direct download in the walkthrough.
pub fn mediapipe_source() -> &'static ModelSource {
    &MODEL_SOURCES[1]
}

/// Prints the source table, notes included.
pub fn list_sources(out: &mut impl std::io::Write) -> std::io::Result<()> {
    for (i, source) in MODEL_SOURCES.iter().enumerate() {
        writeln!(out, "[{}] {}", i + 1, source.name)?;
        writeln!(out, "    url:      {}", source.url)?;
        writeln!(out, "    filename: {}", source.filename)?;
        writeln!(out, "    note:     {}", source.note)?;
    }
    writeln!(out, "[manual] {}", MANUAL_MODEL_URL)?;
    writeln!(out, "    filename: {}", MANUAL_MODEL_FILENAME)?;
    Ok(())
}
