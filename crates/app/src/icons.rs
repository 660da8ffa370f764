use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{
    LdActivity, LdAward, LdBell, LdBookOpen, LdBuilding, LdCalendar, LdCheck, LdClipboardList,
    LdCreditCard, LdDatabase, LdFileText, LdGraduationCap, LdHeart, LdLayers, LdLayoutDashboard,
    LdMessageSquare, LdNotebook, LdSettings, LdUsers, LdWallet,
};
use dioxus_free_icons::Icon;
use shared_types::menu::MenuIcon;

/// Lucide icon for a menu entry.
#[component]
pub fn MenuGlyph(icon: MenuIcon, #[props(default = 18)] size: u32) -> Element {
    match icon {
        MenuIcon::Dashboard => rsx! { Icon::<LdLayoutDashboard> { icon: LdLayoutDashboard, width: size, height: size } },
        MenuIcon::Building => rsx! { Icon::<LdBuilding> { icon: LdBuilding, width: size, height: size } },
        MenuIcon::Database => rsx! { Icon::<LdDatabase> { icon: LdDatabase, width: size, height: size } },
        MenuIcon::CreditCard => rsx! { Icon::<LdCreditCard> { icon: LdCreditCard, width: size, height: size } },
        MenuIcon::Chart => rsx! { Icon::<LdActivity> { icon: LdActivity, width: size, height: size } },
        MenuIcon::Users => rsx! { Icon::<LdUsers> { icon: LdUsers, width: size, height: size } },
        MenuIcon::Teacher => rsx! { Icon::<LdGraduationCap> { icon: LdGraduationCap, width: size, height: size } },
        MenuIcon::Layers => rsx! { Icon::<LdLayers> { icon: LdLayers, width: size, height: size } },
        MenuIcon::ClipboardList => rsx! { Icon::<LdClipboardList> { icon: LdClipboardList, width: size, height: size } },
        MenuIcon::Wallet => rsx! { Icon::<LdWallet> { icon: LdWallet, width: size, height: size } },
        MenuIcon::Calendar => rsx! { Icon::<LdCalendar> { icon: LdCalendar, width: size, height: size } },
        MenuIcon::FileText => rsx! { Icon::<LdFileText> { icon: LdFileText, width: size, height: size } },
        MenuIcon::BookOpen => rsx! { Icon::<LdBookOpen> { icon: LdBookOpen, width: size, height: size } },
        MenuIcon::CheckSquare => rsx! { Icon::<LdCheck> { icon: LdCheck, width: size, height: size } },
        MenuIcon::Award => rsx! { Icon::<LdAward> { icon: LdAward, width: size, height: size } },
        MenuIcon::Notebook => rsx! { Icon::<LdNotebook> { icon: LdNotebook, width: size, height: size } },
        MenuIcon::Heart => rsx! { Icon::<LdHeart> { icon: LdHeart, width: size, height: size } },
        MenuIcon::Bell => rsx! { Icon::<LdBell> { icon: LdBell, width: size, height: size } },
        MenuIcon::Message => rsx! { Icon::<LdMessageSquare> { icon: LdMessageSquare, width: size, height: size } },
        MenuIcon::Settings => rsx! { Icon::<LdSettings> { icon: LdSettings, width: size, height: size } },
    }
}
