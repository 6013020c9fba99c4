pub mod organization;
pub mod organization_member;
pub mod user;

/*
 Users sign up on their own and can authenticate without belonging to anything.
 Organizations are created by a logged-in user, who becomes the first admin member.
 Inviting someone adds them straight to the member list and fires off an email.
 */
