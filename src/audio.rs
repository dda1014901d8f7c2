use rodio::{Decoder, OutputStream, OutputStreamHandle, Sink, Source, source::Buffered};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::config::Settings;

type Sound = Buffered<Decoder<BufReader<File>>>;

/// Audio manager for playing sound effects
pub struct AudioManager {
    /// None when no output device could be opened
    output: Option<(OutputStream, OutputStreamHandle)>,
    hit_sound: Option<Sound>,
    win_sound: Option<Sound>,
    volume: f32,
}

impl AudioManager {
    /// Opens the default output device and pre-loads the sound effects.
    /// Anything that fails is logged and that sound stays silent.
    pub fn new(settings: &Settings) -> Self {
        let output = match OutputStream::try_default() {
            Ok(output) => Some(output),
            Err(err) => {
                log::warn!("Failed to open audio output, continuing without sound: {}", err);
                None
            }
        };

        let (hit_sound, win_sound) = if output.is_some() {
            (load_sound(&settings.hit_sound), load_sound(&settings.win_sound))
        } else {
            (None, None)
        };

        Self {
            output,
            hit_sound,
            win_sound,
            volume: settings.sfx_volume,
        }
    }

    pub fn play_hit_sound(&self) {
        self.play(self.hit_sound.as_ref());
    }

    pub fn play_win_sound(&self) {
        self.play(self.win_sound.as_ref());
    }

    fn play(&self, sound: Option<&Sound>) {
        let (Some((_, handle)), Some(sound)) = (&self.output, sound) else {
            return;
        };
        // Playback errors are not worth stopping the game for
        if let Ok(sink) = Sink::try_new(handle) {
            sink.set_volume(self.volume);
            // Clone the buffered source (fast - just clones references)
            sink.append(sound.clone());
            sink.detach();
        }
    }
}

fn load_sound(path: &Path) -> Option<Sound> {
    let decoded = File::open(path)
        .map_err(|err| err.to_string())
        .and_then(|file| Decoder::new(BufReader::new(file)).map_err(|err| err.to_string()));

    match decoded {
        Ok(source) => Some(source.buffered()),
        Err(err) => {
            log::warn!("Failed to load sound {}: {}", path.display(), err);
            None
        }
    }
}
