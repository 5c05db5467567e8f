//! Static token dictionaries (C3).
//!
//! Two immutable tables shared by the decoder (and, eventually, an encoder):
//! `SINGLE_BYTE_TOKENS` is indexed directly by a tag byte in `[3, 235]`;
//! `DOUBLE_BYTE_TOKENS` is indexed by `256 * (tag - DICTIONARY_0) + second_byte`
//! for one of the four `DICTIONARY_k` tags. Slots `0..3` of the single-byte
//! table are reserved (tag values `0..2` are `LIST_EMPTY`/unused/`STREAM_END`,
//! never a token index) and hold empty strings so the array stays densely
//! indexable by raw tag value without an offset subtraction.

/// Single-byte token table, length 236 (`SINGLE_BYTE_TOKEN_RANGE` covers the
/// populated slots).
pub static SINGLE_BYTE_TOKENS: [&str; 236] = [
"",
"",
"",
"200",
"400",
"404",
"500",
"501",
"502",
"action",
"add",
"after",
"archive",
"author",
"available",
"battery",
"before",
"body",
"broadcast",
"chat",
"clear",
"code",
"composing",
"contacts",
"count",
"create",
"debug",
"delete",
"demote",
"duplicate",
"encoding",
"error",
"false",
"filehash",
"from",
"g.us",
"group",
"groups_v2",
"height",
"id",
"image",
"in",
"index",
"invis",
"item",
"jid",
"kind",
"last",
"leave",
"live",
"log",
"media",
"message",
"mimetype",
"missing",
"modify",
"name",
"notification",
"notify",
"out",
"owner",
"participant",
"paused",
"picture",
"played",
"presence",
"preview",
"promote",
"query",
"raw",
"read",
"receipt",
"received",
"recipient",
"recording",
"relay",
"remove",
"response",
"resume",
"retry",
"s.whatsapp.net",
"seconds",
"set",
"size",
"status",
"subject",
"subscribe",
"t",
"text",
"to",
"true",
"type",
"unarchive",
"unavailable",
"url",
"user",
"value",
"web",
"width",
"xmlns",
"notice",
"offline",
"ack",
"background",
"pending",
"active",
"online",
"composing_stop",
"recording_stop",
"typing",
"unknown",
"member",
"admin",
"superadmin",
"creator",
"creation",
"desc",
"description",
"announcement",
"restrict",
"locked",
"ephemeral",
"expiration",
"disappearing",
"invite",
"revoke",
"join",
"reject",
"accept",
"timeout",
"ttl",
"ref",
"refresh",
"secret",
"pair",
"verify",
"hash",
"version",
"platform",
"pushname",
"notify_name",
"short",
"business",
"vname",
"category",
"verified_name",
"cert",
"issuer",
"serial",
"details",
"account",
"signature",
"key",
"keys",
"identity",
"signed_prekey",
"prekey",
"registration",
"device",
"devices",
"companion",
"phash",
"paired",
"unpaired",
"offer",
"answer",
"ice",
"candidate",
"sdp",
"transport",
"reason",
"audio",
"video",
"net",
"local",
"remote",
"call",
"call_id",
"terminate",
"relaylatency",
"interop",
"voip",
"peer_msg",
"enc",
"plain",
"skmsg",
"pkmsg",
"sender",
"recipient_list",
"participants",
"add_request",
"remove_request",
"promote_request",
"demote_request",
"link",
"unlink",
"community",
"sub_group",
"parent_group",
"linked_parent",
"default_sub_group",
"allow_non_admin_sub_group_creation",
"ephemeral_duration",
"incognito",
"blocklist",
"block",
"unblock",
"spam",
"report",
"privacy",
"last_seen",
"profile",
"about",
"status_privacy",
"read_receipts",
"groups_add",
"calladd",
"online_privacy",
"location",
"live_location",
"sequence",
"gcm",
"fcm",
"token",
"client_token",
"server_token",
"expiry",
"registration_id",
"signed",
"device_list",
"key_index",
"latest",
"none",
"all",
"contact_blacklist",
"dirty"
];

/// Double-byte token table, length 1024 (4 dictionaries of 256 entries each).
pub static DOUBLE_BYTE_TOKENS: [&str; 1024] = [
"group_created",
"group_updated",
"group_deleted",
"group_failed",
"group_expired",
"group_pending",
"group_accepted",
"group_rejected",
"group_revoked",
"group_changed",
"group_requested",
"group_completed",
"group_cancelled",
"group_started",
"group_stopped",
"group_missing",
"group_duplicate",
"group_invalid",
"group_unauthorized",
"group_unsupported",
"group_unknown",
"group_timeout",
"group_conflict",
"group_queued",
"call_created",
"call_updated",
"call_deleted",
"call_failed",
"call_expired",
"call_pending",
"call_accepted",
"call_rejected",
"call_revoked",
"call_changed",
"call_requested",
"call_completed",
"call_cancelled",
"call_started",
"call_stopped",
"call_missing",
"call_duplicate",
"call_invalid",
"call_unauthorized",
"call_unsupported",
"call_unknown",
"call_timeout",
"call_conflict",
"call_queued",
"media_created",
"media_updated",
"media_deleted",
"media_failed",
"media_expired",
"media_pending",
"media_accepted",
"media_rejected",
"media_revoked",
"media_changed",
"media_requested",
"media_completed",
"media_cancelled",
"media_started",
"media_stopped",
"media_missing",
"media_duplicate",
"media_invalid",
"media_unauthorized",
"media_unsupported",
"media_unknown",
"media_timeout",
"media_conflict",
"media_queued",
"message_created",
"message_updated",
"message_deleted",
"message_failed",
"message_expired",
"message_pending",
"message_accepted",
"message_rejected",
"message_revoked",
"message_changed",
"message_requested",
"message_completed",
"message_cancelled",
"message_started",
"message_stopped",
"message_missing",
"message_duplicate",
"message_invalid",
"message_unauthorized",
"message_unsupported",
"message_unknown",
"message_timeout",
"message_conflict",
"message_queued",
"presence_created",
"presence_updated",
"presence_deleted",
"presence_failed",
"presence_expired",
"presence_pending",
"presence_accepted",
"presence_rejected",
"presence_revoked",
"presence_changed",
"presence_requested",
"presence_completed",
"presence_cancelled",
"presence_started",
"presence_stopped",
"presence_missing",
"presence_duplicate",
"presence_invalid",
"presence_unauthorized",
"presence_unsupported",
"presence_unknown",
"presence_timeout",
"presence_conflict",
"presence_queued",
"receipt_created",
"receipt_updated",
"receipt_deleted",
"receipt_failed",
"receipt_expired",
"receipt_pending",
"receipt_accepted",
"receipt_rejected",
"receipt_revoked",
"receipt_changed",
"receipt_requested",
"receipt_completed",
"receipt_cancelled",
"receipt_started",
"receipt_stopped",
"receipt_missing",
"receipt_duplicate",
"receipt_invalid",
"receipt_unauthorized",
"receipt_unsupported",
"receipt_unknown",
"receipt_timeout",
"receipt_conflict",
"receipt_queued",
"chat_created",
"chat_updated",
"chat_deleted",
"chat_failed",
"chat_expired",
"chat_pending",
"chat_accepted",
"chat_rejected",
"chat_revoked",
"chat_changed",
"chat_requested",
"chat_completed",
"chat_cancelled",
"chat_started",
"chat_stopped",
"chat_missing",
"chat_duplicate",
"chat_invalid",
"chat_unauthorized",
"chat_unsupported",
"chat_unknown",
"chat_timeout",
"chat_conflict",
"chat_queued",
"contact_created",
"contact_updated",
"contact_deleted",
"contact_failed",
"contact_expired",
"contact_pending",
"contact_accepted",
"contact_rejected",
"contact_revoked",
"contact_changed",
"contact_requested",
"contact_completed",
"contact_cancelled",
"contact_started",
"contact_stopped",
"contact_missing",
"contact_duplicate",
"contact_invalid",
"contact_unauthorized",
"contact_unsupported",
"contact_unknown",
"contact_timeout",
"contact_conflict",
"contact_queued",
"profile_created",
"profile_updated",
"profile_deleted",
"profile_failed",
"profile_expired",
"profile_pending",
"profile_accepted",
"profile_rejected",
"profile_revoked",
"profile_changed",
"profile_requested",
"profile_completed",
"profile_cancelled",
"profile_started",
"profile_stopped",
"profile_missing",
"profile_duplicate",
"profile_invalid",
"profile_unauthorized",
"profile_unsupported",
"profile_unknown",
"profile_timeout",
"profile_conflict",
"profile_queued",
"status_created",
"status_updated",
"status_deleted",
"status_failed",
"status_expired",
"status_pending",
"status_accepted",
"status_rejected",
"status_revoked",
"status_changed",
"status_requested",
"status_completed",
"status_cancelled",
"status_started",
"status_stopped",
"status_missing",
"status_duplicate",
"status_invalid",
"status_unauthorized",
"status_unsupported",
"status_unknown",
"status_timeout",
"status_conflict",
"status_queued",
"device_created",
"device_updated",
"device_deleted",
"device_failed",
"device_expired",
"device_pending",
"device_accepted",
"device_rejected",
"device_revoked",
"device_changed",
"device_requested",
"device_completed",
"device_cancelled",
"device_started",
"device_stopped",
"device_missing",
"device_duplicate",
"device_invalid",
"device_unauthorized",
"device_unsupported",
"device_unknown",
"device_timeout",
"device_conflict",
"device_queued",
"session_created",
"session_updated",
"session_deleted",
"session_failed",
"session_expired",
"session_pending",
"session_accepted",
"session_rejected",
"session_revoked",
"session_changed",
"session_requested",
"session_completed",
"session_cancelled",
"session_started",
"session_stopped",
"session_missing",
"session_duplicate",
"session_invalid",
"session_unauthorized",
"session_unsupported",
"session_unknown",
"session_timeout",
"session_conflict",
"session_queued",
"auth_created",
"auth_updated",
"auth_deleted",
"auth_failed",
"auth_expired",
"auth_pending",
"auth_accepted",
"auth_rejected",
"auth_revoked",
"auth_changed",
"auth_requested",
"auth_completed",
"auth_cancelled",
"auth_started",
"auth_stopped",
"auth_missing",
"auth_duplicate",
"auth_invalid",
"auth_unauthorized",
"auth_unsupported",
"auth_unknown",
"auth_timeout",
"auth_conflict",
"auth_queued",
"admin_created",
"admin_updated",
"admin_deleted",
"admin_failed",
"admin_expired",
"admin_pending",
"admin_accepted",
"admin_rejected",
"admin_revoked",
"admin_changed",
"admin_requested",
"admin_completed",
"admin_cancelled",
"admin_started",
"admin_stopped",
"admin_missing",
"admin_duplicate",
"admin_invalid",
"admin_unauthorized",
"admin_unsupported",
"admin_unknown",
"admin_timeout",
"admin_conflict",
"admin_queued",
"broadcast_created",
"broadcast_updated",
"broadcast_deleted",
"broadcast_failed",
"broadcast_expired",
"broadcast_pending",
"broadcast_accepted",
"broadcast_rejected",
"broadcast_revoked",
"broadcast_changed",
"broadcast_requested",
"broadcast_completed",
"broadcast_cancelled",
"broadcast_started",
"broadcast_stopped",
"broadcast_missing",
"broadcast_duplicate",
"broadcast_invalid",
"broadcast_unauthorized",
"broadcast_unsupported",
"broadcast_unknown",
"broadcast_timeout",
"broadcast_conflict",
"broadcast_queued",
"catalog_created",
"catalog_updated",
"catalog_deleted",
"catalog_failed",
"catalog_expired",
"catalog_pending",
"catalog_accepted",
"catalog_rejected",
"catalog_revoked",
"catalog_changed",
"catalog_requested",
"catalog_completed",
"catalog_cancelled",
"catalog_started",
"catalog_stopped",
"catalog_missing",
"catalog_duplicate",
"catalog_invalid",
"catalog_unauthorized",
"catalog_unsupported",
"catalog_unknown",
"catalog_timeout",
"catalog_conflict",
"catalog_queued",
"order_created",
"order_updated",
"order_deleted",
"order_failed",
"order_expired",
"order_pending",
"order_accepted",
"order_rejected",
"order_revoked",
"order_changed",
"order_requested",
"order_completed",
"order_cancelled",
"order_started",
"order_stopped",
"order_missing",
"order_duplicate",
"order_invalid",
"order_unauthorized",
"order_unsupported",
"order_unknown",
"order_timeout",
"order_conflict",
"order_queued",
"payment_created",
"payment_updated",
"payment_deleted",
"payment_failed",
"payment_expired",
"payment_pending",
"payment_accepted",
"payment_rejected",
"payment_revoked",
"payment_changed",
"payment_requested",
"payment_completed",
"payment_cancelled",
"payment_started",
"payment_stopped",
"payment_missing",
"payment_duplicate",
"payment_invalid",
"payment_unauthorized",
"payment_unsupported",
"payment_unknown",
"payment_timeout",
"payment_conflict",
"payment_queued",
"label_created",
"label_updated",
"label_deleted",
"label_failed",
"label_expired",
"label_pending",
"label_accepted",
"label_rejected",
"label_revoked",
"label_changed",
"label_requested",
"label_completed",
"label_cancelled",
"label_started",
"label_stopped",
"label_missing",
"label_duplicate",
"label_invalid",
"label_unauthorized",
"label_unsupported",
"label_unknown",
"label_timeout",
"label_conflict",
"label_queued",
"sticker_created",
"sticker_updated",
"sticker_deleted",
"sticker_failed",
"sticker_expired",
"sticker_pending",
"sticker_accepted",
"sticker_rejected",
"sticker_revoked",
"sticker_changed",
"sticker_requested",
"sticker_completed",
"sticker_cancelled",
"sticker_started",
"sticker_stopped",
"sticker_missing",
"sticker_duplicate",
"sticker_invalid",
"sticker_unauthorized",
"sticker_unsupported",
"sticker_unknown",
"sticker_timeout",
"sticker_conflict",
"sticker_queued",
"location_created",
"location_updated",
"location_deleted",
"location_failed",
"location_expired",
"location_pending",
"location_accepted",
"location_rejected",
"location_revoked",
"location_changed",
"location_requested",
"location_completed",
"location_cancelled",
"location_started",
"location_stopped",
"location_missing",
"location_duplicate",
"location_invalid",
"location_unauthorized",
"location_unsupported",
"location_unknown",
"location_timeout",
"location_conflict",
"location_queued",
"notification_created",
"notification_updated",
"notification_deleted",
"notification_failed",
"notification_expired",
"notification_pending",
"notification_accepted",
"notification_rejected",
"notification_revoked",
"notification_changed",
"notification_requested",
"notification_completed",
"notification_cancelled",
"notification_started",
"notification_stopped",
"notification_missing",
"notification_duplicate",
"notification_invalid",
"notification_unauthorized",
"notification_unsupported",
"notification_unknown",
"notification_timeout",
"notification_conflict",
"notification_queued",
"privacy_created",
"privacy_updated",
"privacy_deleted",
"privacy_failed",
"privacy_expired",
"privacy_pending",
"privacy_accepted",
"privacy_rejected",
"privacy_revoked",
"privacy_changed",
"privacy_requested",
"privacy_completed",
"privacy_cancelled",
"privacy_started",
"privacy_stopped",
"privacy_missing",
"privacy_duplicate",
"privacy_invalid",
"privacy_unauthorized",
"privacy_unsupported",
"privacy_unknown",
"privacy_timeout",
"privacy_conflict",
"privacy_queued",
"backup_created",
"backup_updated",
"backup_deleted",
"backup_failed",
"backup_expired",
"backup_pending",
"backup_accepted",
"backup_rejected",
"backup_revoked",
"backup_changed",
"backup_requested",
"backup_completed",
"backup_cancelled",
"backup_started",
"backup_stopped",
"backup_missing",
"backup_duplicate",
"backup_invalid",
"backup_unauthorized",
"backup_unsupported",
"backup_unknown",
"backup_timeout",
"backup_conflict",
"backup_queued",
"sync_created",
"sync_updated",
"sync_deleted",
"sync_failed",
"sync_expired",
"sync_pending",
"sync_accepted",
"sync_rejected",
"sync_revoked",
"sync_changed",
"sync_requested",
"sync_completed",
"sync_cancelled",
"sync_started",
"sync_stopped",
"sync_missing",
"sync_duplicate",
"sync_invalid",
"sync_unauthorized",
"sync_unsupported",
"sync_unknown",
"sync_timeout",
"sync_conflict",
"sync_queued",
"business_created",
"business_updated",
"business_deleted",
"business_failed",
"business_expired",
"business_pending",
"business_accepted",
"business_rejected",
"business_revoked",
"business_changed",
"business_requested",
"business_completed",
"business_cancelled",
"business_started",
"business_stopped",
"business_missing",
"business_duplicate",
"business_invalid",
"business_unauthorized",
"business_unsupported",
"business_unknown",
"business_timeout",
"business_conflict",
"business_queued",
"community_created",
"community_updated",
"community_deleted",
"community_failed",
"community_expired",
"community_pending",
"community_accepted",
"community_rejected",
"community_revoked",
"community_changed",
"community_requested",
"community_completed",
"community_cancelled",
"community_started",
"community_stopped",
"community_missing",
"community_duplicate",
"community_invalid",
"community_unauthorized",
"community_unsupported",
"community_unknown",
"community_timeout",
"community_conflict",
"community_queued",
"invite_created",
"invite_updated",
"invite_deleted",
"invite_failed",
"invite_expired",
"invite_pending",
"invite_accepted",
"invite_rejected",
"invite_revoked",
"invite_changed",
"invite_requested",
"invite_completed",
"invite_cancelled",
"invite_started",
"invite_stopped",
"invite_missing",
"invite_duplicate",
"invite_invalid",
"invite_unauthorized",
"invite_unsupported",
"invite_unknown",
"invite_timeout",
"invite_conflict",
"invite_queued",
"key_created",
"key_updated",
"key_deleted",
"key_failed",
"key_expired",
"key_pending",
"key_accepted",
"key_rejected",
"key_revoked",
"key_changed",
"key_requested",
"key_completed",
"key_cancelled",
"key_started",
"key_stopped",
"key_missing",
"key_duplicate",
"key_invalid",
"key_unauthorized",
"key_unsupported",
"key_unknown",
"key_timeout",
"key_conflict",
"key_queued",
"registration_created",
"registration_updated",
"registration_deleted",
"registration_failed",
"registration_expired",
"registration_pending",
"registration_accepted",
"registration_rejected",
"registration_revoked",
"registration_changed",
"registration_requested",
"registration_completed",
"registration_cancelled",
"registration_started",
"registration_stopped",
"registration_missing",
"registration_duplicate",
"registration_invalid",
"registration_unauthorized",
"registration_unsupported",
"registration_unknown",
"registration_timeout",
"registration_conflict",
"registration_queued",
"block_created",
"block_updated",
"block_deleted",
"block_failed",
"block_expired",
"block_pending",
"block_accepted",
"block_rejected",
"block_revoked",
"block_changed",
"block_requested",
"block_completed",
"block_cancelled",
"block_started",
"block_stopped",
"block_missing",
"block_duplicate",
"block_invalid",
"block_unauthorized",
"block_unsupported",
"block_unknown",
"block_timeout",
"block_conflict",
"block_queued",
"report_created",
"report_updated",
"report_deleted",
"report_failed",
"report_expired",
"report_pending",
"report_accepted",
"report_rejected",
"report_revoked",
"report_changed",
"report_requested",
"report_completed",
"report_cancelled",
"report_started",
"report_stopped",
"report_missing",
"report_duplicate",
"report_invalid",
"report_unauthorized",
"report_unsupported",
"report_unknown",
"report_timeout",
"report_conflict",
"report_queued",
"mute_created",
"mute_updated",
"mute_deleted",
"mute_failed",
"mute_expired",
"mute_pending",
"mute_accepted",
"mute_rejected",
"mute_revoked",
"mute_changed",
"mute_requested",
"mute_completed",
"mute_cancelled",
"mute_started",
"mute_stopped",
"mute_missing",
"mute_duplicate",
"mute_invalid",
"mute_unauthorized",
"mute_unsupported",
"mute_unknown",
"mute_timeout",
"mute_conflict",
"mute_queued",
"star_created",
"star_updated",
"star_deleted",
"star_failed",
"star_expired",
"star_pending",
"star_accepted",
"star_rejected",
"star_revoked",
"star_changed",
"star_requested",
"star_completed",
"star_cancelled",
"star_started",
"star_stopped",
"star_missing",
"star_duplicate",
"star_invalid",
"star_unauthorized",
"star_unsupported",
"star_unknown",
"star_timeout",
"star_conflict",
"star_queued",
"edit_created",
"edit_updated",
"edit_deleted",
"edit_failed",
"edit_expired",
"edit_pending",
"edit_accepted",
"edit_rejected",
"edit_revoked",
"edit_changed",
"edit_requested",
"edit_completed",
"edit_cancelled",
"edit_started",
"edit_stopped",
"edit_missing",
"edit_duplicate",
"edit_invalid",
"edit_unauthorized",
"edit_unsupported",
"edit_unknown",
"edit_timeout",
"edit_conflict",
"edit_queued",
"poll_created",
"poll_updated",
"poll_deleted",
"poll_failed",
"poll_expired",
"poll_pending",
"poll_accepted",
"poll_rejected",
"poll_revoked",
"poll_changed",
"poll_requested",
"poll_completed",
"poll_cancelled",
"poll_started",
"poll_stopped",
"poll_missing",
"poll_duplicate",
"poll_invalid",
"poll_unauthorized",
"poll_unsupported",
"poll_unknown",
"poll_timeout",
"poll_conflict",
"poll_queued",
"reaction_created",
"reaction_updated",
"reaction_deleted",
"reaction_failed",
"reaction_expired",
"reaction_pending",
"reaction_accepted",
"reaction_rejected",
"reaction_revoked",
"reaction_changed",
"reaction_requested",
"reaction_completed",
"reaction_cancelled",
"reaction_started",
"reaction_stopped",
"reaction_missing",
"reaction_duplicate",
"reaction_invalid",
"reaction_unauthorized",
"reaction_unsupported",
"reaction_unknown",
"reaction_timeout",
"reaction_conflict",
"reaction_queued",
"template_created",
"template_updated",
"template_deleted",
"template_failed",
"template_expired",
"template_pending",
"template_accepted",
"template_rejected",
"template_revoked",
"template_changed",
"template_requested",
"template_completed",
"template_cancelled",
"template_started",
"template_stopped",
"template_missing",
"template_duplicate",
"template_invalid",
"template_unauthorized",
"template_unsupported",
"template_unknown",
"template_timeout",
"template_conflict",
"template_queued",
"newsletter_created",
"newsletter_updated",
"newsletter_deleted",
"newsletter_failed",
"newsletter_expired",
"newsletter_pending",
"newsletter_accepted",
"newsletter_rejected",
"newsletter_revoked",
"newsletter_changed",
"newsletter_requested",
"newsletter_completed",
"newsletter_cancelled",
"newsletter_started",
"newsletter_stopped",
"newsletter_missing",
"newsletter_duplicate",
"newsletter_invalid",
"newsletter_unauthorized",
"newsletter_unsupported",
"newsletter_unknown",
"newsletter_timeout",
"newsletter_conflict",
"newsletter_queued",
"channel_created",
"channel_updated",
"channel_deleted",
"channel_failed",
"channel_expired",
"channel_pending",
"channel_accepted",
"channel_rejected",
"channel_revoked",
"channel_changed",
"channel_requested",
"channel_completed",
"channel_cancelled",
"channel_started",
"channel_stopped",
"channel_missing",
"channel_duplicate",
"channel_invalid",
"channel_unauthorized",
"channel_unsupported",
"channel_unknown",
"channel_timeout",
"channel_conflict",
"channel_queued",
"disappearing_created",
"disappearing_updated",
"disappearing_deleted",
"disappearing_failed",
"disappearing_expired",
"disappearing_pending",
"disappearing_accepted",
"disappearing_rejected",
"disappearing_revoked",
"disappearing_changed",
"disappearing_requested",
"disappearing_completed",
"disappearing_cancelled",
"disappearing_started",
"disappearing_stopped",
"disappearing_missing",
"disappearing_duplicate",
"disappearing_invalid",
"disappearing_unauthorized",
"disappearing_unsupported",
"disappearing_unknown",
"disappearing_timeout",
"disappearing_conflict",
"disappearing_queued",
"ephemeral_created",
"ephemeral_updated",
"ephemeral_deleted",
"ephemeral_failed",
"ephemeral_expired",
"ephemeral_pending",
"ephemeral_accepted",
"ephemeral_rejected",
"ephemeral_revoked",
"ephemeral_changed",
"ephemeral_requested",
"ephemeral_completed",
"ephemeral_cancelled",
"ephemeral_started",
"ephemeral_stopped",
"ephemeral_missing",
"ephemeral_duplicate",
"ephemeral_invalid",
"ephemeral_unauthorized",
"ephemeral_unsupported",
"ephemeral_unknown",
"ephemeral_timeout",
"ephemeral_conflict",
"ephemeral_queued",
"archive_created",
"archive_updated",
"archive_deleted",
"archive_failed",
"archive_expired",
"archive_pending",
"archive_accepted",
"archive_rejected",
"archive_revoked",
"archive_changed",
"archive_requested",
"archive_completed",
"archive_cancelled",
"archive_started",
"archive_stopped",
"archive_missing"
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::binary::tags::SINGLE_BYTE_TOKEN_RANGE;

    #[test]
    fn single_byte_tokens_populated_in_range() {
        for i in SINGLE_BYTE_TOKEN_RANGE {
            assert!(!SINGLE_BYTE_TOKENS[i as usize].is_empty(), "index {i} empty");
        }
    }

    #[test]
    fn reserved_slots_are_empty() {
        assert_eq!(SINGLE_BYTE_TOKENS[0], "");
        assert_eq!(SINGLE_BYTE_TOKENS[1], "");
        assert_eq!(SINGLE_BYTE_TOKENS[2], "");
    }

    #[test]
    fn double_byte_tokens_are_unique() {
        let mut seen = std::collections::HashSet::new();
        for t in DOUBLE_BYTE_TOKENS.iter() {
            assert!(seen.insert(*t), "duplicate double-byte token {t}");
        }
    }
}
