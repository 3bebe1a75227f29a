use mentor_core::model::{AppSettings, GREETING, Sender, SuggestionKind};
use mentor_core::time::fixed_clock;
use services::{ChatError, ChatService};

#[tokio::test]
async fn every_suggestion_gets_its_own_reply() {
    let service = ChatService::new(fixed_clock(), &AppSettings::instant());
    let default = service.reply_for("anything else").to_string();

    for kind in SuggestionKind::ALL {
        let mut thread = service.start_thread();
        assert!(thread.shows_suggestions());

        let pending = service.submit(&mut thread, kind.text()).unwrap();
        assert!(thread.is_typing());
        let reply = service.compose_reply(pending).await;
        assert_ne!(reply.content, default, "{kind:?} fell back to the default reply");

        service.deliver(&mut thread, reply).unwrap();
        let senders: Vec<Sender> = thread.messages().iter().map(|m| m.sender()).collect();
        assert_eq!(senders, vec![Sender::Bot, Sender::User, Sender::Bot]);
        assert_eq!(thread.messages()[0].content(), GREETING);
    }
}

#[tokio::test]
async fn conversation_alternates_and_blocks_while_typing() {
    let service = ChatService::new(fixed_clock(), &AppSettings::instant());
    let mut thread = service.start_thread();

    let first = service.submit(&mut thread, "What should I learn next?").unwrap();
    assert_eq!(
        service.submit(&mut thread, "hello?").unwrap_err(),
        ChatError::ReplyPending
    );

    let reply = service.compose_reply(first).await;
    service.deliver(&mut thread, reply.clone()).unwrap();
    assert_eq!(
        service.deliver(&mut thread, reply).unwrap_err(),
        ChatError::UnexpectedReply(thread.messages()[1].id())
    );

    service.submit(&mut thread, "thanks").unwrap();
    assert_eq!(thread.messages().len(), 4);
    assert!(!thread.shows_suggestions());
}
