//! Per-variant effects.
//!
//! Each variant resolves its text through the placeholder manager, then
//! performs exactly one effect through a collaborator. Errors surface to the
//! caller, which logs them and continues the sequence.

use std::borrow::Cow;

use tracing::{debug, trace};

use super::{Action, ActionContext, ActionError, ActionKind, ActionOutcome};
use super::{ItemSpec, SoundSpec, TeleportSpec, TitleSpec};
use crate::env::{CommandSource, MenuEnv, OracleError, PlayerHandle};

impl Action {
    /// Performs this action's effect for `ctx`.
    ///
    /// `Delay` is a no-op here. `Sequence` performs nothing itself and hands its
    /// children back as [`ActionOutcome::Nested`].
    pub fn execute(
        &self,
        ctx: &ActionContext,
        env: &MenuEnv<'_>,
    ) -> Result<ActionOutcome, ActionError> {
        trace!(target: "menu::actions", action = self.type_tag(), ?ctx, "executing");

        match self {
            Action::Message(text) => {
                let player = online(ctx)?;
                player.send_message(&resolve(env, ctx, text));
            }
            Action::ActionBar(text) => {
                let player = online(ctx)?;
                player.send_action_bar(&resolve(env, ctx, text));
            }
            Action::Title(value) => {
                let player = online(ctx)?;
                let spec = TitleSpec::parse(&resolve(env, ctx, value), env.defaults());
                player.send_title(&spec.title, &spec.subtitle, spec.timings);
            }
            Action::Broadcast(text) => {
                env.server()?.broadcast(&resolve(env, ctx, text));
            }

            Action::Command(command) => {
                let source = CommandSource::Player(ctx.player().id());
                dispatch(env, ctx, source, command)?;
            }
            Action::Console(command) => {
                dispatch(env, ctx, CommandSource::Console, command)?;
            }
            Action::OpCommand(command) => {
                let source = CommandSource::Operator(ctx.player().id());
                dispatch(env, ctx, source, command)?;
            }

            Action::Back => back(ctx, env)?,
            Action::Close => {
                env.sessions()?.close_menu(ctx.player().id())?;
            }
            Action::Refresh => {
                env.sessions()?.refresh_menu(ctx.player().id())?;
            }
            Action::OpenMenu(menu) => open_menu(ctx, env, menu)?,
            Action::Connect(server) => {
                let player = online(ctx)?;
                let server = non_empty(resolve(env, ctx, server), ActionKind::Connect)?;
                player.connect(&server)?;
            }

            Action::GiveItem(value) => {
                let player = online(ctx)?;
                let spec = ItemSpec::parse(&resolve(env, ctx, value));
                let stack = env.items()?.create(&spec.item, spec.amount)?;
                player.add_item(&stack)?;
            }
            Action::TakeItem(value) => {
                let player = online(ctx)?;
                let spec = ItemSpec::parse(&resolve(env, ctx, value));
                let stack = env.items()?.create(&spec.item, spec.amount)?;
                let available = player.count_item(&stack.item);
                if available < stack.amount {
                    return Err(ActionError::InsufficientItems {
                        item: stack.item,
                        required: stack.amount,
                        available,
                    });
                }
                player.remove_item(&stack)?;
            }
            Action::Teleport(value) => {
                let player = online(ctx)?;
                let target = TeleportSpec::parse(&resolve(env, ctx, value)).apply(&player.location());
                player.teleport(&target)?;
            }
            Action::Sound(value) => {
                let player = online(ctx)?;
                let spec = SoundSpec::parse(&resolve(env, ctx, value), env.defaults());
                let sound = non_empty(Cow::Owned(spec.sound), ActionKind::Sound)?;
                player.play_sound(&sound, spec.volume, spec.pitch)?;
            }

            Action::SetData(value) => {
                let session = ctx.session().ok_or(ActionError::NoSession {
                    kind: ActionKind::SetData,
                })?;
                let resolved = resolve(env, ctx, value);
                let (key, data) = resolved
                    .trim_start()
                    .split_once(char::is_whitespace)
                    .unwrap_or((resolved.trim(), ""));
                let key = non_empty(Cow::Borrowed(key), ActionKind::SetData)?;
                session.set_data(key.into_owned(), data.trim_start());
            }

            Action::Delay(_) => {}
            Action::Sequence(children) => {
                return Ok(ActionOutcome::Nested(children.clone()));
            }
        }

        Ok(ActionOutcome::Completed)
    }
}

fn resolve<'t>(env: &MenuEnv<'_>, ctx: &ActionContext, text: &'t str) -> Cow<'t, str> {
    env.placeholders().parse(text, &ctx.placeholder_context())
}

fn online(ctx: &ActionContext) -> Result<&dyn PlayerHandle, ActionError> {
    let player = ctx.player();
    if player.is_online() {
        Ok(player)
    } else {
        Err(OracleError::PlayerOffline.into())
    }
}

fn non_empty(text: Cow<'_, str>, kind: ActionKind) -> Result<Cow<'_, str>, ActionError> {
    if text.trim().is_empty() {
        Err(ActionError::EmptyValue { kind })
    } else {
        Ok(text)
    }
}

fn dispatch(
    env: &MenuEnv<'_>,
    ctx: &ActionContext,
    source: CommandSource,
    command: &str,
) -> Result<(), ActionError> {
    let resolved = resolve(env, ctx, command);
    let command = resolved.trim().trim_start_matches('/');
    if command.is_empty() {
        return Err(ActionError::EmptyCommand);
    }

    debug!(target: "menu::actions", %source, command, "dispatching command");
    env.commands()?.perform(source, command)?;
    Ok(())
}

fn back(ctx: &ActionContext, env: &MenuEnv<'_>) -> Result<(), ActionError> {
    let sessions = env.sessions()?;
    let player = ctx.player().id();
    let previous = ctx
        .session()
        .and_then(|s| s.data(&env.defaults().previous_menu_key));

    match previous {
        Some(menu) if !menu.is_empty() => {
            debug!(target: "menu::actions", menu = %menu, "returning to previous menu");
            sessions.open_menu(player, &menu)?;
        }
        _ => sessions.close_menu(player)?,
    }
    Ok(())
}

fn open_menu(ctx: &ActionContext, env: &MenuEnv<'_>, menu: &str) -> Result<(), ActionError> {
    let sessions = env.sessions()?;
    let player = ctx.player().id();
    let menu = non_empty(resolve(env, ctx, menu), ActionKind::OpenMenu)?;

    let previous = match ctx.session() {
        Some(session) => Some(session.menu_id().to_string()),
        None => sessions.current(player).map(|s| s.menu_id().to_string()),
    };

    let opened = sessions.open_menu(player, menu.trim())?;
    if let Some(previous) = previous.filter(|p| p != opened.menu_id()) {
        opened.set_data(&env.defaults().previous_menu_key, previous);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::config::ActionDefaults;
    use crate::env::SessionStore;
    use crate::placeholder::{ArgumentsProvider, PlaceholderManager, SessionProvider};
    use crate::test_support::{TestCommands, TestItems, TestPlayer, TestSessions};

    struct Fixture {
        player: Arc<TestPlayer>,
        placeholders: PlaceholderManager,
        defaults: ActionDefaults,
        commands: TestCommands,
        sessions: TestSessions,
    }

    impl Fixture {
        fn new() -> Self {
            let mut placeholders = PlaceholderManager::new();
            placeholders.register(SessionProvider);
            placeholders.register(ArgumentsProvider);
            Self {
                player: Arc::new(TestPlayer::new("Steve")),
                placeholders,
                defaults: ActionDefaults::default(),
                commands: TestCommands::default(),
                sessions: TestSessions::default(),
            }
        }

        fn env(&self) -> MenuEnv<'_> {
            MenuEnv::new(&self.placeholders, &self.defaults)
                .with_commands(&self.commands)
                .with_sessions(&self.sessions)
                .with_items(&TestItems)
        }

        fn ctx(&self) -> ActionContext {
            ActionContext::new(self.player.clone())
        }

        fn run(&self, action: Action, ctx: &ActionContext) -> Result<ActionOutcome, ActionError> {
            action.execute(ctx, &self.env())
        }
    }

    #[test]
    fn message_resolves_placeholders() {
        let fx = Fixture::new();
        let ctx = fx.ctx().with_args(["gold"]);
        fx.run(Action::Message("bought %arg_0%".into()), &ctx).unwrap();
        assert_eq!(fx.player.messages(), vec!["bought gold"]);
    }

    #[test]
    fn commands_run_as_the_right_source() {
        let fx = Fixture::new();
        let ctx = fx.ctx();
        fx.run(Action::Command("/spawn".into()), &ctx).unwrap();
        fx.run(Action::Console("say hi".into()), &ctx).unwrap();
        fx.run(Action::OpCommand("gamemode creative".into()), &ctx).unwrap();

        let id = fx.player.id();
        let dispatched = fx.commands.dispatched.lock().unwrap().clone();
        assert_eq!(
            dispatched,
            vec![
                (CommandSource::Player(id), "spawn".to_string()),
                (CommandSource::Console, "say hi".to_string()),
                (CommandSource::Operator(id), "gamemode creative".to_string()),
            ]
        );
    }

    #[test]
    fn empty_command_is_rejected() {
        let fx = Fixture::new();
        let err = fx.run(Action::Command(" / ".into()), &fx.ctx()).unwrap_err();
        assert_eq!(err, ActionError::EmptyCommand);
    }

    #[test]
    fn set_data_needs_a_session() {
        let fx = Fixture::new();
        let err = fx.run(Action::SetData("k v".into()), &fx.ctx()).unwrap_err();
        assert_eq!(
            err,
            ActionError::NoSession {
                kind: ActionKind::SetData
            }
        );
    }

    #[test]
    fn set_data_is_readable_as_placeholder() {
        let fx = Fixture::new();
        let session = fx.sessions.open(fx.player.id(), "shop");
        let ctx = fx.ctx().with_session(session.clone());

        fx.run(Action::SetData("choice red wool".into()), &ctx).unwrap();
        fx.run(Action::SetData("choice blue".into()), &ctx).unwrap();
        fx.run(Action::Message("%session_data_choice%".into()), &ctx).unwrap();

        assert_eq!(session.data("choice").as_deref(), Some("blue"));
        assert_eq!(fx.player.messages(), vec!["blue"]);
    }

    #[test]
    fn open_menu_records_previous_and_back_returns() {
        let fx = Fixture::new();
        let main = fx.sessions.open(fx.player.id(), "main");
        let ctx = fx.ctx().with_session(main);

        fx.run(Action::OpenMenu("shop".into()), &ctx).unwrap();
        let shop = fx.sessions.current(fx.player.id()).unwrap();
        assert_eq!(shop.menu_id(), "shop");
        assert_eq!(shop.data("previous_menu").as_deref(), Some("main"));

        fx.run(Action::Back, &fx.ctx().with_session(shop)).unwrap();
        assert_eq!(fx.sessions.current(fx.player.id()).unwrap().menu_id(), "main");
    }

    #[test]
    fn back_without_history_closes() {
        let fx = Fixture::new();
        let main = fx.sessions.open(fx.player.id(), "main");
        fx.run(Action::Back, &fx.ctx().with_session(main)).unwrap();
        assert!(fx.sessions.current(fx.player.id()).is_none());
        assert_eq!(*fx.sessions.closed.lock().unwrap(), 1);
    }

    #[test]
    fn open_unknown_menu_fails_with_configuration_error() {
        let fx = Fixture::new();
        let err = fx.run(Action::OpenMenu("missing_menu".into()), &fx.ctx()).unwrap_err();
        assert_eq!(
            err,
            ActionError::Oracle(OracleError::MenuNotFound("missing_menu".into()))
        );
    }

    #[test]
    fn take_item_checks_inventory() {
        let fx = Fixture::new();
        let ctx = fx.ctx();
        fx.run(Action::GiveItem("diamond 3".into()), &ctx).unwrap();

        let err = fx.run(Action::TakeItem("diamond 5".into()), &ctx).unwrap_err();
        assert_eq!(
            err,
            ActionError::InsufficientItems {
                item: "diamond".into(),
                required: 5,
                available: 3,
            }
        );

        fx.run(Action::TakeItem("diamond 2".into()), &ctx).unwrap();
        assert_eq!(fx.player.holding("diamond"), 1);
    }

    #[test]
    fn teleport_is_relative_to_current_position() {
        let fx = Fixture::new();
        fx.run(Action::Teleport("~ ~5 ~".into()), &fx.ctx()).unwrap();
        let at = fx.player.location();
        assert_eq!((at.x, at.y, at.z), (10.0, 25.0, 30.0));
    }

    #[test]
    fn missing_collaborator_is_reported() {
        let fx = Fixture::new();
        let err = fx.run(Action::Broadcast("hi".into()), &fx.ctx()).unwrap_err();
        assert_eq!(err, ActionError::Oracle(OracleError::ServerNotAvailable));
    }

    #[test]
    fn sequence_hands_back_children() {
        let fx = Fixture::new();
        let action = Action::sequence([Action::Message("a".into()), Action::Delay(2)]);
        let outcome = fx.run(action, &fx.ctx()).unwrap();
        assert!(matches!(outcome, ActionOutcome::Nested(children) if children.len() == 2));
        assert!(fx.player.messages().is_empty());
    }

    #[test]
    fn delay_has_no_effect() {
        let fx = Fixture::new();
        assert_eq!(fx.run(Action::Delay(5), &fx.ctx()), Ok(ActionOutcome::Completed));
    }
}
