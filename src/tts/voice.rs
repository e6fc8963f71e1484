use serde::{Deserialize, Serialize};

const DEFAULT_MODEL: &str = "zh_en_female_2";
const DEFAULT_SPEED: i32 = 1;
const DEFAULT_PITCH: i32 = 1;
const DEFAULT_ENERGY: i32 = 1;
const DEFAULT_ENCODING: &str = "LINEAR16";
const DEFAULT_SAMPLE_RATE: &str = "16K";

const INPUT_TYPE_TEXT: &str = "text";

/// Voice and audio settings sent with every synthesis request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VoiceProfile {
    pub model: String,
    pub speed: i32,
    pub pitch: i32,
    pub energy: i32,
    pub encoding: String,
    pub sample_rate: String,
}

impl Default for VoiceProfile {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            speed: DEFAULT_SPEED,
            pitch: DEFAULT_PITCH,
            energy: DEFAULT_ENERGY,
            encoding: DEFAULT_ENCODING.to_string(),
            sample_rate: DEFAULT_SAMPLE_RATE.to_string(),
        }
    }
}

// Field order below is the wire order.

#[derive(Debug, Clone, Serialize)]
pub struct SynthesisRequest {
    pub input: SynthesisInput,
    pub voice: VoiceParams,
    #[serde(rename = "audioConfig")]
    pub audio_config: AudioConfig,
}

#[derive(Debug, Clone, Serialize)]
pub struct SynthesisInput {
    pub text: String,
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct VoiceParams {
    pub model: String,
    pub speed: i32,
    pub pitch: i32,
    pub energy: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AudioConfig {
    pub encoding: String,
    #[serde(rename = "sampleRate")]
    pub sample_rate: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SynthesisResponse {
    #[serde(rename = "audioContent")]
    pub audio_content: String,
    #[serde(rename = "audioConfig")]
    pub audio_config: AudioConfig,
}

impl SynthesisRequest {
    pub fn new(text: &str, profile: &VoiceProfile) -> Self {
        Self {
            input: SynthesisInput {
                text: text.to_string(),
                kind: INPUT_TYPE_TEXT.to_string(),
            },
            voice: VoiceParams {
                model: profile.model.clone(),
                speed: profile.speed,
                pitch: profile.pitch,
                energy: profile.energy,
            },
            audio_config: AudioConfig {
                encoding: profile.encoding.clone(),
                sample_rate: profile.sample_rate.clone(),
            },
        }
    }
}
