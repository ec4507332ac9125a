pub mod account;
pub mod module;

/*
 Accounts own modules. Every module has exactly one owner, fixed at creation:
 a regular account always becomes the owner of what it creates, staff can
 assign someone else. Self-registered accounts start inactive and stay locked
 out until the emailed activation code is redeemed. The csu bin seeds an
 already-active staff + superuser account for bootstrap.
 */
