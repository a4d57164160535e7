use bevy::prelude::*;
use constants::contact::{CONTACT_BUTTON_LABEL, SOCIAL_LINKS};

use crate::rpc::web_rpc::WebRpcInterface;

const BUTTON_IDLE: Color = Color::srgb(0.57, 0.37, 1.0);
const BUTTON_HOVER: Color = Color::srgb(0.66, 0.49, 1.0);
const BUTTON_PRESSED: Color = Color::srgb(0.45, 0.27, 0.86);
const LINK_IDLE: Color = Color::srgb(0.09, 0.10, 0.20);
const LINK_HOVER: Color = Color::srgb(0.16, 0.17, 0.30);

/// Request to change the dropdown, from the host page.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactMenuEvent {
    Toggle,
    Open,
    Close,
}

impl ContactMenuEvent {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContactMenuEvent::Toggle => "toggle",
            ContactMenuEvent::Open => "open",
            ContactMenuEvent::Close => "close",
        }
    }
}

/// Open flag of the dropdown, stored on the "GET IN TOUCH" button.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ContactMenu {
    pub is_open: bool,
}

impl ContactMenu {
    pub fn after(self, event: ContactMenuEvent) -> Self {
        let is_open = match event {
            ContactMenuEvent::Toggle => !self.is_open,
            ContactMenuEvent::Open => true,
            ContactMenuEvent::Close => false,
        };
        Self { is_open }
    }
}

#[derive(Component)]
pub struct ContactMenuDropdown;

#[derive(Component, Debug, Clone)]
pub struct SocialLinkButton {
    pub url: &'static str,
}

pub struct ContactMenuPlugin;

impl Plugin for ContactMenuPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<ContactMenuEvent>()
            .add_systems(Startup, spawn_contact_menu)
            .add_systems(
                Update,
                (
                    contact_button_interaction,
                    apply_contact_menu_events,
                    sync_dropdown_visibility,
                    notify_contact_menu_changed,
                )
                    .chain(),
            )
            .add_systems(Update, social_link_interaction);
    }
}

fn spawn_contact_menu(mut commands: Commands) {
    commands
        .spawn((
            Name::new("ContactMenu"),
            Node {
                position_type: PositionType::Absolute,
                top: Val::Px(16.0),
                right: Val::Px(16.0),
                display: Display::Flex,
                flex_direction: FlexDirection::Column,
                align_items: AlignItems::FlexEnd,
                row_gap: Val::Px(6.0),
                ..default()
            },
        ))
        .with_children(|parent| {
            parent
                .spawn((
                    ContactMenu::default(),
                    Button,
                    Name::new("ContactButton"),
                    BackgroundColor(BUTTON_IDLE),
                    Node {
                        padding: UiRect::axes(Val::Px(16.0), Val::Px(8.0)),
                        display: Display::Flex,
                        align_items: AlignItems::Center,
                        justify_content: JustifyContent::Center,
                        ..default()
                    },
                ))
                .with_children(|btn| {
                    btn.spawn((
                        Text::new(CONTACT_BUTTON_LABEL),
                        TextFont {
                            font_size: 16.0,
                            ..default()
                        },
                        TextColor(Color::WHITE),
                    ));
                });

            parent
                .spawn((
                    ContactMenuDropdown,
                    Name::new("ContactDropdown"),
                    BackgroundColor(LINK_IDLE),
                    Node {
                        display: Display::None,
                        flex_direction: FlexDirection::Column,
                        padding: UiRect::all(Val::Px(6.0)),
                        row_gap: Val::Px(4.0),
                        ..default()
                    },
                ))
                .with_children(|dropdown| {
                    for link in SOCIAL_LINKS {
                        dropdown
                            .spawn((
                                SocialLinkButton { url: link.url },
                                Button,
                                Name::new(link.name),
                                BackgroundColor(LINK_IDLE),
                                Node {
                                    width: Val::Px(140.0),
                                    padding: UiRect::axes(Val::Px(12.0), Val::Px(6.0)),
                                    ..default()
                                },
                            ))
                            .with_children(|btn| {
                                btn.spawn((
                                    Text::new(link.name),
                                    TextFont {
                                        font_size: 14.0,
                                        ..default()
                                    },
                                    TextColor(Color::WHITE),
                                ));
                            });
                    }
                });
        });
}

// Clicking the button flips the dropdown.
fn contact_button_interaction(
    mut q: Query<
        (&Interaction, &mut ContactMenu, &mut BackgroundColor),
        (Changed<Interaction>, With<Button>),
    >,
) {
    for (interaction, mut menu, mut bg) in &mut q {
        match *interaction {
            Interaction::Pressed => {
                *menu = menu.after(ContactMenuEvent::Toggle);
                *bg = BackgroundColor(BUTTON_PRESSED);
            }
            Interaction::Hovered => *bg = BackgroundColor(BUTTON_HOVER),
            Interaction::None => *bg = BackgroundColor(BUTTON_IDLE),
        }
    }
}

fn apply_contact_menu_events(
    mut events: EventReader<ContactMenuEvent>,
    mut menus: Query<&mut ContactMenu>,
) {
    for event in events.read() {
        for mut menu in &mut menus {
            let next = menu.after(*event);
            menu.set_if_neq(next);
        }
    }
}

fn sync_dropdown_visibility(
    menus: Query<&ContactMenu, Changed<ContactMenu>>,
    mut dropdowns: Query<&mut Node, With<ContactMenuDropdown>>,
) {
    let Some(menu) = menus.iter().next() else {
        return;
    };

    for mut node in &mut dropdowns {
        node.display = if menu.is_open {
            Display::Flex
        } else {
            Display::None
        };
    }
}

fn notify_contact_menu_changed(
    menus: Query<Ref<ContactMenu>>,
    mut rpc_interface: ResMut<WebRpcInterface>,
) {
    for menu in &menus {
        if menu.is_changed() && !menu.is_added() {
            println!("Contact menu {}", if menu.is_open { "opened" } else { "closed" });
            rpc_interface.send_notification(
                "contact_menu_changed",
                serde_json::json!({
                    "open": menu.is_open
                }),
            );
        }
    }
}

fn social_link_interaction(
    mut q: Query<
        (&Interaction, &SocialLinkButton, &mut BackgroundColor),
        (Changed<Interaction>, With<Button>),
    >,
) {
    for (interaction, link, mut bg) in &mut q {
        match *interaction {
            Interaction::Pressed => open_link(link.url),
            Interaction::Hovered => *bg = BackgroundColor(LINK_HOVER),
            Interaction::None => *bg = BackgroundColor(LINK_IDLE),
        }
    }
}

fn open_link(url: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        match web_sys::window() {
            Some(window) => {
                if let Err(e) = window.open_with_url_and_target(url, "_blank") {
                    error!("Failed to open {}: {:?}", url, e);
                }
            }
            None => error!("Window object not available"),
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        info!("Opening social link: {}", url);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn menu_app() -> App {
        let mut app = App::new();
        app.init_resource::<WebRpcInterface>()
            .add_event::<ContactMenuEvent>()
            .add_systems(
                Update,
                (
                    apply_contact_menu_events,
                    sync_dropdown_visibility,
                    notify_contact_menu_changed,
                )
                    .chain(),
            );
        app
    }

    fn spawn_menu(app: &mut App) -> (Entity, Entity) {
        let menu = app.world_mut().spawn(ContactMenu::default()).id();
        let dropdown = app
            .world_mut()
            .spawn((
                ContactMenuDropdown,
                Node {
                    display: Display::None,
                    ..default()
                },
            ))
            .id();
        (menu, dropdown)
    }

    #[test]
    fn transitions_follow_events() {
        let closed = ContactMenu { is_open: false };
        let open = ContactMenu { is_open: true };

        assert_eq!(closed.after(ContactMenuEvent::Toggle), open);
        assert_eq!(open.after(ContactMenuEvent::Toggle), closed);
        assert_eq!(open.after(ContactMenuEvent::Open), open);
        assert_eq!(closed.after(ContactMenuEvent::Close), closed);
        assert_eq!(open.after(ContactMenuEvent::Close), closed);
    }

    #[test]
    fn open_event_shows_dropdown() {
        let mut app = menu_app();
        let (menu, dropdown) = spawn_menu(&mut app);
        app.update();

        app.world_mut().send_event(ContactMenuEvent::Open);
        app.update();

        assert!(app.world().get::<ContactMenu>(menu).unwrap().is_open);
        assert_eq!(
            app.world().get::<Node>(dropdown).unwrap().display,
            Display::Flex
        );

        app.world_mut().send_event(ContactMenuEvent::Toggle);
        app.update();

        assert!(!app.world().get::<ContactMenu>(menu).unwrap().is_open);
        assert_eq!(
            app.world().get::<Node>(dropdown).unwrap().display,
            Display::None
        );
    }

    #[test]
    fn notifies_only_on_real_change() {
        let mut app = menu_app();
        spawn_menu(&mut app);
        app.update();
        assert!(
            app.world()
                .resource::<WebRpcInterface>()
                .pending_notifications()
                .is_empty()
        );

        // Closing an already closed menu is not a change.
        app.world_mut().send_event(ContactMenuEvent::Close);
        app.update();
        assert!(
            app.world()
                .resource::<WebRpcInterface>()
                .pending_notifications()
                .is_empty()
        );

        app.world_mut().send_event(ContactMenuEvent::Open);
        app.update();
        let rpc = app.world().resource::<WebRpcInterface>();
        assert_eq!(rpc.pending_notifications().len(), 1);
        assert_eq!(rpc.pending_notifications()[0].method, "contact_menu_changed");
        assert_eq!(
            rpc.pending_notifications()[0].params,
            serde_json::json!({"open": true})
        );
    }
}
