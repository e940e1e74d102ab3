//! Interface languages and their user-facing text.

/// Interface language.  Stored in settings as a short tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Russian,
    English,
}

impl Language {
    pub fn tag(self) -> &'static str {
        match self {
            Language::Russian => "ru",
            Language::English => "en",
        }
    }

    /// Parses a stored tag.  Unknown tags fall back to English.
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "ru" => Language::Russian,
            _ => Language::English,
        }
    }

    pub fn texts(self) -> &'static Texts {
        match self {
            Language::Russian => &RUSSIAN,
            Language::English => &ENGLISH,
        }
    }
}

/// Answers accepted as "yes" in either language, compared lowercase.
pub const YES_ANSWERS: [&str; 4] = ["yes", "y", "да", "д"];

/// Language picker shown before any language is known.
pub const LANGUAGE_MENU: [&str; 3] = [
    "Выберите язык / Choose language:",
    "1. Русский",
    "2. English",
];
pub const LANGUAGE_PROMPT: &str = "Введите номер / Enter number (1 или 2): ";
pub const LANGUAGE_INVALID: &str =
    "Неверный выбор. Пожалуйста, введите 1 или 2 / Invalid choice. Please enter 1 or 2";
pub const RULE: &str = "==================================================";

/// All text for one language.
#[derive(Debug)]
pub struct Texts {
    // Session loop
    pub welcome: &'static str,
    pub total_generated: &'static str,
    pub reconfigure: &'static str,
    pub regenerating: &'static str,
    pub enter_count: &'static str,
    pub invalid_number: &'static str,
    pub generated: &'static str,
    pub history_saved: &'static str,
    pub continue_prompt: &'static str,
    pub goodbye: &'static str,
    pub error: &'static str,

    // Authoring
    pub format_title: &'static str,
    pub settings_saved: &'static str,
    pub parts_count_prompt: &'static str,
    pub parts_count_range: &'static str,
    pub enter_number: &'static str,
    pub separator_prompt: &'static str,
    pub part_setup: &'static str,
    pub part_length_prompt: &'static str,
    pub part_length_range: &'static str,
    pub use_letters_prompt: &'static str,
    pub use_digits_prompt: &'static str,
    pub prefix_prompt: &'static str,
    pub suffix_prompt: &'static str,

    // Configuration summary
    pub config_title: &'static str,
    pub separator_label: &'static str,
    pub parts_label: &'static str,
    pub part_label: &'static str,
    pub length_label: &'static str,
    pub letters: &'static str,
    pub digits: &'static str,
    pub prefix_label: &'static str,
    pub suffix_label: &'static str,
}

pub static RUSSIAN: Texts = Texts {
    welcome: "=== Генератор промокодов ===",
    total_generated: "Всего сгенерировано:",
    reconfigure: "Хотите изменить настройки промокодов? (да/нет): ",
    regenerating: "Перенастройка формата промокодов...",
    enter_count: "Сколько промокодов нужно сгенерировать? ",
    invalid_number: "Пожалуйста, введите целое положительное число!",
    generated: "Сгенерированные промокоды:",
    history_saved: "Промокоды сохранены в историю",
    continue_prompt: "Хотите сгенерировать еще промокоды? (да/нет): ",
    goodbye: "До свидания!",
    error: "Ошибка:",

    format_title: "Настройка формата промокодов",
    settings_saved: "Настройки сохранены",
    parts_count_prompt: "Сколько частей в промокоде? (например: 3 для XXX-YYY-ZZZ): ",
    parts_count_range: "Введите число от 1 до 10",
    enter_number: "Пожалуйста, введите число",
    separator_prompt: "Введите разделитель (например: - или _ или пробел): ",
    part_setup: "Настройка части",
    part_length_prompt: "Длина части",
    part_length_range: "Длина должна быть от 1 до 20",
    use_letters_prompt: "Использовать буквы? (да/нет): ",
    use_digits_prompt: "Использовать цифры? (да/нет): ",
    prefix_prompt: "Префикс (необязательно): ",
    suffix_prompt: "Суффикс (необязательно): ",

    config_title: "--- Текущая конфигурация ---",
    separator_label: "Разделитель:",
    parts_label: "Части промокода:",
    part_label: "Часть",
    length_label: "длина",
    letters: "буквы",
    digits: "цифры",
    prefix_label: "префикс:",
    suffix_label: "суффикс:",
};

pub static ENGLISH: Texts = Texts {
    welcome: "=== Promo Code Generator ===",
    total_generated: "Total generated:",
    reconfigure: "Do you want to change promo code settings? (yes/no): ",
    regenerating: "Reconfiguring promo code format...",
    enter_count: "How many promo codes to generate? ",
    invalid_number: "Please enter a positive integer!",
    generated: "Generated promo codes:",
    history_saved: "Promo codes saved to history",
    continue_prompt: "Generate more promo codes? (yes/no): ",
    goodbye: "Goodbye!",
    error: "Error:",

    format_title: "Promo code format configuration",
    settings_saved: "Settings saved",
    parts_count_prompt: "How many parts in promo code? (e.g., 3 for XXX-YYY-ZZZ): ",
    parts_count_range: "Please enter a number from 1 to 10",
    enter_number: "Please enter a number",
    separator_prompt: "Enter separator (e.g., - or _ or space): ",
    part_setup: "Configuring part",
    part_length_prompt: "Length of part",
    part_length_range: "Length must be from 1 to 20",
    use_letters_prompt: "Use letters? (yes/no): ",
    use_digits_prompt: "Use digits? (yes/no): ",
    prefix_prompt: "Prefix (optional): ",
    suffix_prompt: "Suffix (optional): ",

    config_title: "--- Current Configuration ---",
    separator_label: "Separator:",
    parts_label: "Promo code parts:",
    part_label: "Part",
    length_label: "length",
    letters: "letters",
    digits: "digits",
    prefix_label: "prefix:",
    suffix_label: "suffix:",
};
