use crate::settings::form::{Field, FieldKind, FieldOption, Section};
use crate::theme::registry::DEFAULT_THEME_ID;

const GROUP_ID_PLACEHOLDER: &str = "-1001234567890";

/// Compiled-in sections of the settings page with their default values.
pub fn default_sections() -> Vec<Section> {
    vec![
        appearance(),
        bot_configuration(),
        pm_management(),
        assistant_bot(),
        media(),
        security(),
        external_apis(),
        home_page(),
    ]
}

fn appearance() -> Section {
    Section::new(
        "Appearance",
        "Customize the look and feel of your Ultroid interface",
        "palette",
        vec![
            Field::new("theme", "Theme", FieldKind::Theme, DEFAULT_THEME_ID)
                .with_description("Choose your preferred color theme"),
            Field::new("avatarShape", "Avatar Shape", FieldKind::AvatarShape, "circle")
                .with_options(vec![
                    FieldOption::new("Circle", "circle"),
                    FieldOption::new("Rounded Square", "rounded-square"),
                    FieldOption::new("Square", "square"),
                    FieldOption::new("Hexagon", "hexagon"),
                ])
                .with_description("Choose the shape for your profile avatar"),
        ],
    )
}

fn bot_configuration() -> Section {
    Section::new(
        "Bot Configuration",
        "Configure bot operation modes and command handlers",
        "cpu",
        vec![
            Field::new("BOT_MODE", "Bot Mode", FieldKind::Toggle, false)
                .with_description("Enable bot mode - run as bot instead of userbot"),
            Field::new("DUAL_MODE", "Dual Mode", FieldKind::Toggle, false)
                .with_description("Enable dual mode - run both userbot and assistant bot"),
            Field::new("HNDLR", "Command Handler", FieldKind::Input, ".")
                .with_description("Primary command prefix (default: .)"),
            Field::new("DUAL_HNDLR", "Dual Handler", FieldKind::Input, "/")
                .with_description("Secondary command prefix for dual mode (default: /)")
                .with_placeholder("/"),
            Field::new("SUDO", "Sudo Mode", FieldKind::Toggle, false)
                .with_description("Allow certain users to use your bot commands"),
            Field::new("SUDO_HNDLR", "Sudo Handler", FieldKind::Input, "!")
                .with_description("Command prefix for sudo users (default: !)")
                .with_placeholder("!"),
            Field::new("ADDONS", "Enable Addons", FieldKind::Toggle, false)
                .with_description("Enable extra addon plugins"),
            Field::new("PLUGIN_CHANNEL", "Plugin Channel", FieldKind::Input, "")
                .with_description("Channel username/ID to install plugins from")
                .with_placeholder("@ultroidplugins"),
            Field::new("EMOJI_IN_HELP", "Help Menu Emoji", FieldKind::Input, "")
                .with_description("Emoji to display in help menu"),
        ],
    )
}

fn pm_management() -> Section {
    Section::new(
        "PM Management",
        "Configure private message permissions and settings",
        "message-circle",
        vec![
            Field::new("PMSETTING", "PM Permit", FieldKind::Toggle, false)
                .with_description("Enable PM permission system"),
            Field::new("INLINE_PM", "Inline PM", FieldKind::Toggle, false)
                .with_description("Use inline buttons for PM permit"),
            Field::new("PM_TEXT", "PM Permit Message", FieldKind::Textarea, "")
                .with_description(
                    "Custom message for PM permit. Use {name}, {mention}, {username} variables",
                )
                .with_placeholder("Hello {name}, please wait for approval..."),
            Field::new("PMWARNS", "PM Warnings", FieldKind::Number, 3)
                .with_description("Number of warnings before blocking user")
                .with_range(1.0, 10.0),
            Field::new("AUTOAPPROVE", "Auto Approve", FieldKind::Toggle, false)
                .with_description("Auto approve users when you message them"),
            Field::new("PMLOG", "PM Logger", FieldKind::Toggle, false)
                .with_description("Log private messages to a group"),
            Field::new("PMLOGGROUP", "PM Log Group", FieldKind::Input, "")
                .with_description("Group ID where PM logs will be sent")
                .with_placeholder(GROUP_ID_PLACEHOLDER),
        ],
    )
}

fn assistant_bot() -> Section {
    Section::new(
        "Assistant Bot",
        "Configure your assistant bot settings",
        "bot",
        vec![
            Field::new("PMBOT", "Chat Bot", FieldKind::Toggle, false)
                .with_description("Enable assistant bot for chatting"),
            Field::new("STARTMSG", "Welcome Message", FieldKind::Textarea, "")
                .with_description(
                    "Message shown when users start your bot. Use {me}, {mention} variables",
                )
                .with_placeholder("Welcome to my assistant bot!"),
            Field::new("BOT_INFO_START", "Bot Info Text", FieldKind::Textarea, "")
                .with_description("Text shown when users press Info button")
                .with_placeholder("This is my personal assistant bot."),
        ],
    )
}

fn media() -> Section {
    Section::new(
        "Media & Customization",
        "Customize alive messages and media settings",
        "image",
        vec![
            Field::new("ALIVE_TEXT", "Alive Message", FieldKind::Textarea, "")
                .with_description("Custom text for alive command")
                .with_placeholder("I'm alive and running Ultroid!"),
        ],
    )
}

fn security() -> Section {
    Section::new(
        "Security & Logging",
        "Configure logging and security features",
        "shield",
        vec![
            Field::new("TAG_LOG", "Tag Logger Group", FieldKind::Input, "")
                .with_description("Group ID where tag notifications will be sent")
                .with_placeholder(GROUP_ID_PLACEHOLDER),
            Field::new("FBAN_GROUP_ID", "FBan Group", FieldKind::Input, "")
                .with_description("Group ID for federation ban operations")
                .with_placeholder(GROUP_ID_PLACEHOLDER),
            Field::new("EXCLUDE_FED", "Excluded Federations", FieldKind::Input, "")
                .with_description("Federation IDs to exclude from bans (space separated)")
                .with_placeholder("fed1 fed2 fed3"),
        ],
    )
}

fn external_apis() -> Section {
    Section::new(
        "External APIs",
        "Configure external API keys for enhanced features",
        "key",
        vec![
            Field::new("RMBG_API", "Remove.bg API", FieldKind::Input, "")
                .with_description("API key for background removal service")
                .with_placeholder("Your remove.bg API key"),
            Field::new("DEEP_AI", "Deep AI API", FieldKind::Input, "")
                .with_description("API key for Deep AI services")
                .with_placeholder("Your DeepAI API key"),
            Field::new("OCR_API", "OCR Space API", FieldKind::Input, "")
                .with_description("API key for OCR text recognition")
                .with_placeholder("Your OCR Space API key"),
            Field::new("GDRIVE_FOLDER_ID", "Google Drive Folder", FieldKind::Input, "")
                .with_description("Google Drive folder ID for file uploads")
                .with_placeholder("1BxiMVs0XRA5nFMdKvBdBZjgmUUqptlbs74OgvE2upms"),
        ],
    )
}

fn home_page() -> Section {
    Section::new(
        "Mini App Home page",
        "Configure your mini app's homepage settings",
        "home",
        vec![
            Field::new("showStarDonation", "Show Star Donation", FieldKind::Toggle, false)
                .with_description("Display star donation option on the home page"),
            Field::new("donationAmounts", "Donation Amounts", FieldKind::Input, "1,5,50")
                .with_description("Comma-separated list of donation amounts (e.g. 1,5,50)")
                .with_placeholder("1,5,50"),
        ],
    )
}
