use serde::Deserialize;

pub const LED_CORRECT: &str = "led_correct";
pub const LED_WRONG: &str = "led_wrong";
pub const BUTTON_QUIT: &str = "button_quit";
pub const BUTTON_1: &str = "button_1";
pub const BUTTON_2: &str = "button_2";
pub const BUTTON_3: &str = "button_3";

#[derive(Debug, Clone, Deserialize)]
pub struct ChipConfig {
    #[serde(default = "default_chip")]
    pub name: String,
    #[serde(default = "default_consumer")]
    pub consumer: String,
}

fn default_chip() -> String {
    "gpiochip0".to_string()
}

fn default_consumer() -> String {
    "Consumer".to_string()
}

impl Default for ChipConfig {
    fn default() -> Self {
        Self {
            name: default_chip(),
            consumer: default_consumer(),
        }
    }
}

/// Fixed assignment of the six quiz roles to line offsets. Defaults match
/// the stock wiring: LEDs on 23/27, buttons on 18/17/10/25.
#[derive(Debug, Clone, Deserialize)]
pub struct LineMap {
    #[serde(default = "default_led_correct")]
    pub led_correct: u32,
    #[serde(default = "default_led_wrong")]
    pub led_wrong: u32,
    #[serde(default = "default_button_quit")]
    pub button_quit: u32,
    #[serde(default = "default_button_1")]
    pub button_1: u32,
    #[serde(default = "default_button_2")]
    pub button_2: u32,
    #[serde(default = "default_button_3")]
    pub button_3: u32,
}

fn default_led_correct() -> u32 {
    23
}
fn default_led_wrong() -> u32 {
    27
}
fn default_button_quit() -> u32 {
    18
}
fn default_button_1() -> u32 {
    17
}
fn default_button_2() -> u32 {
    10
}
fn default_button_3() -> u32 {
    25
}

impl Default for LineMap {
    fn default() -> Self {
        Self {
            led_correct: default_led_correct(),
            led_wrong: default_led_wrong(),
            button_quit: default_button_quit(),
            button_1: default_button_1(),
            button_2: default_button_2(),
            button_3: default_button_3(),
        }
    }
}

impl LineMap {
    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Output roles in the order they are brought up.
    pub fn outputs(&self) -> [(&'static str, u32); 2] {
        [(LED_CORRECT, self.led_correct), (LED_WRONG, self.led_wrong)]
    }

    /// Input roles in bring-up order, which is also the poll priority order.
    pub fn inputs(&self) -> [(&'static str, u32); 4] {
        [
            (BUTTON_QUIT, self.button_quit),
            (BUTTON_1, self.button_1),
            (BUTTON_2, self.button_2),
            (BUTTON_3, self.button_3),
        ]
    }
}
