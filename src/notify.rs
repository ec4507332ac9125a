use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tracing::{error, info};
use uuid::Uuid;

use crate::config::config;
use crate::types::mail::SendEmail;
use crate::utils::mail::send_email;

/*
 Outbound notifications are fire and forget. A handler enqueues a Notice and
 moves on, a detached worker turns notices into mail. The contract towards
 the request is "enqueue attempted", never "delivered": a dropped receiver
 and any delivery failure stay invisible to the caller.
 */

#[derive(Debug, Clone, PartialEq)]
pub enum Notice {
    /// Goes to the creating principal once a module row exists.
    ModuleCreated { email: String, title: String },
    /// Carries the one-time code a fresh registration needs to activate.
    ActivationCode {
        email: String,
        account_id: Uuid,
        code: String,
    },
}

/// Cheap cloneable enqueue handle.
#[derive(Clone)]
pub struct Notifier {
    tx: UnboundedSender<Notice>,
}

impl Notifier {
    /// Handle plus the raw receiver. Tests use this to observe what got
    /// enqueued without any delivery happening.
    pub fn channel() -> (Notifier, UnboundedReceiver<Notice>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Notifier { tx }, rx)
    }

    /// Handle backed by a running delivery worker.
    pub fn spawn() -> Notifier {
        let (notifier, mut rx) = Notifier::channel();
        tokio::spawn(async move {
            while let Some(notice) = rx.recv().await {
                if let Err(err) = deliver(notice).await {
                    error!("notification delivery failed: {err}");
                }
            }
            info!("notification queue closed");
        });
        notifier
    }

    pub fn notify(&self, notice: Notice) {
        // A closed channel means nobody delivers anymore. Not our problem.
        let _ = self.tx.send(notice);
    }
}

async fn deliver(notice: Notice) -> Result<String, String> {
    let config = config();
    match notice {
        Notice::ModuleCreated { email, title } => {
            send_email(SendEmail {
                from: config.mail.from.clone(),
                to: vec![email.clone()],
                subject: "Создание модуля для обучения".to_string(),
                text: Some(format!(
                    "Здравствуйте, {email}!\n\nНа портале {} вы создали курс — {title}!\n\nС уважением, администрация сайта!",
                    config.public_url
                )),
                ..Default::default()
            })
            .await
        }
        Notice::ActivationCode {
            email,
            account_id,
            code,
        } => {
            send_email(SendEmail {
                from: config.mail.from.clone(),
                to: vec![email.clone()],
                subject: "Активация аккаунта".to_string(),
                text: Some(format!(
                    "Здравствуйте, {email}!\n\nДля активации аккаунта перейдите по ссылке:\n{}/account/activate/{account_id}/{code}\n\nС уважением, администрация сайта!",
                    config.public_url
                )),
                ..Default::default()
            })
            .await
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_notify_is_fire_and_forget() {
        let (notifier, mut rx) = Notifier::channel();
        notifier.notify(Notice::ModuleCreated {
            email: "a@test.com".to_string(),
            title: "математика".to_string(),
        });

        let notice = rx.try_recv().unwrap();
        assert_eq!(
            notice,
            Notice::ModuleCreated {
                email: "a@test.com".to_string(),
                title: "математика".to_string(),
            }
        );
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_notify_survives_dropped_receiver() {
        let (notifier, rx) = Notifier::channel();
        drop(rx);
        // must not panic or block
        notifier.notify(Notice::ModuleCreated {
            email: "a@test.com".to_string(),
            title: "математика".to_string(),
        });
    }
}
