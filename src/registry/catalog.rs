//! Built-in catalog covering the Clerk Backend API surface exposed to workflow hosts.

// self
use crate::registry::{
	FieldSpec as F, HttpMethod::*, OperationDescriptor as Op, Resource::*,
};

/// Returns every built-in descriptor, grouped by resource in host display order.
pub fn operations() -> Vec<Op> {
	let mut operations = Vec::with_capacity(49);

	operations.extend(users());
	operations.extend(organizations());
	operations.extend(sessions());
	operations.extend(email_addresses());
	operations.extend(phone_numbers());
	operations.extend(invitations());
	operations.extend(allowlist_identifiers());
	operations.extend(blocklist_identifiers());
	operations.extend(jwt_templates());

	operations
}

fn users() -> Vec<Op> {
	const USER_ID: F = F::path("userId");

	let metadata = [
		F::json("privateMetadata", "private_metadata"),
		F::json("publicMetadata", "public_metadata"),
		F::json("unsafeMetadata", "unsafe_metadata"),
	];

	vec![
		Op::new(Users, "getUsers", Get, "/users").query([
			F::number("limit", "limit").or_number(10),
			F::number("offset", "offset").or_number(0),
			F::text("emailAddress", "email_address"),
			F::text("phoneNumber", "phone_number"),
			F::text("username", "username"),
			F::text("organizationId", "organization_id"),
			F::text("query", "query"),
			F::timestamp("lastActiveAtSince", "last_active_at_since"),
		]),
		Op::new(Users, "getUser", Get, "/users/{userId}").path_fields([USER_ID]),
		Op::new(Users, "createUser", Post, "/users")
			.body([
				F::text_list("emailAddress", "email_address"),
				F::text_list("phoneNumber", "phone_number"),
				F::text("username", "username"),
				F::text("password", "password"),
				F::text("firstName", "first_name"),
				F::text("lastName", "last_name"),
				F::text("externalId", "external_id"),
			])
			.body(metadata),
		Op::new(Users, "updateUser", Patch, "/users/{userId}")
			.path_fields([USER_ID])
			.body([
				F::text("firstName", "first_name"),
				F::text("lastName", "last_name"),
				F::text("primaryEmailAddressId", "primary_email_address_id"),
				F::text("primaryPhoneNumberId", "primary_phone_number_id"),
				F::text("primaryWeb3WalletId", "primary_web3_wallet_id"),
				F::text("username", "username"),
				F::text("profileImageId", "profile_image_id"),
				F::text("password", "password"),
				F::flag("skipPasswordChecks", "skip_password_checks"),
				F::flag("signOutOfOtherSessions", "sign_out_of_other_sessions"),
			])
			.body(metadata),
		Op::new(Users, "deleteUser", Delete, "/users/{userId}").path_fields([USER_ID]),
		Op::new(
			Users,
			"getUserOAuthAccessToken",
			Get,
			"/users/{userId}/oauth_access_tokens/{provider}",
		)
		.path_fields([USER_ID, F::text("provider", "provider").or_text("google")]),
		Op::new(Users, "banUser", Post, "/users/{userId}/ban").path_fields([USER_ID]),
		Op::new(Users, "unbanUser", Post, "/users/{userId}/unban").path_fields([USER_ID]),
		Op::new(Users, "lockUser", Post, "/users/{userId}/lock").path_fields([USER_ID]),
		Op::new(Users, "unlockUser", Post, "/users/{userId}/unlock").path_fields([USER_ID]),
	]
}

fn organizations() -> Vec<Op> {
	const ORG_ID: F = F::path("organization_id");
	const USER_ID: F = F::path("user_id");
	const PRIVATE_METADATA: F = F::json("private_metadata", "private_metadata");
	const PUBLIC_METADATA: F = F::json("public_metadata", "public_metadata");
	const ROLE: F = F::text("role", "role").or_text("basic_member");

	vec![
		Op::new(Organizations, "getOrganizations", Get, "/organizations").query([
			F::number("limit", "limit").or_number(10),
			F::number("offset", "offset").or_number(0),
			F::flag("include_members_count", "include_members_count"),
			F::text("query", "query"),
			F::text("order_by", "order_by").or_text("created_at"),
		]),
		Op::new(Organizations, "getOrganization", Get, "/organizations/{organization_id}")
			.path_fields([ORG_ID])
			.query([F::flag("include_members_count", "include_members_count")]),
		Op::new(Organizations, "createOrganization", Post, "/organizations").body([
			F::text("name", "name").required(),
			F::text("slug", "slug"),
			F::text("created_by", "created_by"),
			PRIVATE_METADATA,
			PUBLIC_METADATA,
			F::number("max_allowed_memberships", "max_allowed_memberships"),
		]),
		Op::new(Organizations, "updateOrganization", Patch, "/organizations/{organization_id}")
			.path_fields([ORG_ID])
			.body([
				F::text("name", "name"),
				F::text("slug", "slug"),
				PRIVATE_METADATA,
				PUBLIC_METADATA,
				F::number("max_allowed_memberships", "max_allowed_memberships"),
			]),
		Op::new(Organizations, "deleteOrganization", Delete, "/organizations/{organization_id}")
			.path_fields([ORG_ID]),
		Op::new(
			Organizations,
			"getOrganizationMemberships",
			Get,
			"/organizations/{organization_id}/memberships",
		)
		.path_fields([ORG_ID])
		.query([
			F::number("limit", "limit").or_number(10),
			F::number("offset", "offset").or_number(0),
			F::text("email_address", "email_address"),
			F::text("phone_number", "phone_number"),
			F::text("username", "username"),
			F::text("user_id", "user_id"),
			F::text("role", "role"),
			F::text("order_by", "order_by").or_text("created_at"),
		]),
		Op::new(
			Organizations,
			"createOrganizationMembership",
			Post,
			"/organizations/{organization_id}/memberships",
		)
		.path_fields([ORG_ID])
		.body([F::text("user_id", "user_id").required(), ROLE]),
		Op::new(
			Organizations,
			"updateOrganizationMembership",
			Patch,
			"/organizations/{organization_id}/memberships/{user_id}",
		)
		.path_fields([ORG_ID, USER_ID])
		.body([ROLE, PRIVATE_METADATA, PUBLIC_METADATA]),
		Op::new(
			Organizations,
			"deleteOrganizationMembership",
			Delete,
			"/organizations/{organization_id}/memberships/{user_id}",
		)
		.path_fields([ORG_ID, USER_ID]),
		Op::new(
			Organizations,
			"getOrganizationInvitations",
			Get,
			"/organizations/{organization_id}/invitations",
		)
		.path_fields([ORG_ID])
		.query([
			F::number("limit", "limit").or_number(10),
			F::number("offset", "offset").or_number(0),
			F::text("status", "status").or_text("pending"),
		]),
		Op::new(
			Organizations,
			"createOrganizationInvitation",
			Post,
			"/organizations/{organization_id}/invitations",
		)
		.path_fields([ORG_ID])
		.body([
			F::text("email_address", "email_address").required(),
			ROLE,
			F::text("inviter_user_id", "inviter_user_id"),
			PRIVATE_METADATA,
			PUBLIC_METADATA,
			F::text("redirect_url", "redirect_url"),
		]),
		Op::new(
			Organizations,
			"revokeOrganizationInvitation",
			Post,
			"/organizations/{organization_id}/invitations/{invitation_id}/revoke",
		)
		.path_fields([ORG_ID, F::path("invitation_id")]),
	]
}

fn sessions() -> Vec<Op> {
	const SESSION_ID: F = F::path("sessionId");

	vec![
		Op::new(Sessions, "getSessions", Get, "/sessions").query([
			F::text("clientId", "client_id"),
			F::text("userId", "user_id"),
			F::text("status", "status"),
			F::number("limit", "limit").or_number(10),
			F::number("offset", "offset").or_number(0),
		]),
		Op::new(Sessions, "getSession", Get, "/sessions/{sessionId}").path_fields([SESSION_ID]),
		Op::new(Sessions, "revokeSession", Post, "/sessions/{sessionId}/revoke")
			.path_fields([SESSION_ID]),
		Op::new(Sessions, "verifySession", Post, "/sessions/{sessionId}/verify")
			.path_fields([SESSION_ID])
			.body([F::text("token", "token").required()]),
		Op::new(Sessions, "getSessionToken", Get, "/sessions/{sessionId}/tokens/{templateName}")
			.path_fields([SESSION_ID, F::path("templateName")]),
	]
}

fn email_addresses() -> Vec<Op> {
	const EMAIL_ADDRESS_ID: F = F::path("emailAddressId");

	vec![
		Op::new(EmailAddresses, "getEmailAddress", Get, "/email_addresses/{emailAddressId}")
			.path_fields([EMAIL_ADDRESS_ID]),
		Op::new(EmailAddresses, "createEmailAddress", Post, "/email_addresses").body([
			F::text("userId", "user_id").required(),
			F::text("emailAddress", "email_address").required(),
			F::flag("verified", "verified").or_flag(false),
			F::flag("primary", "primary").or_flag(false),
		]),
		Op::new(EmailAddresses, "updateEmailAddress", Patch, "/email_addresses/{emailAddressId}")
			.path_fields([EMAIL_ADDRESS_ID])
			.body([F::flag("verified", "verified"), F::flag("primary", "primary")]),
		Op::new(EmailAddresses, "deleteEmailAddress", Delete, "/email_addresses/{emailAddressId}")
			.path_fields([EMAIL_ADDRESS_ID]),
	]
}

fn phone_numbers() -> Vec<Op> {
	const PHONE_NUMBER_ID: F = F::path("phoneNumberId");

	vec![
		Op::new(PhoneNumbers, "getPhoneNumber", Get, "/phone_numbers/{phoneNumberId}")
			.path_fields([PHONE_NUMBER_ID]),
		Op::new(PhoneNumbers, "createPhoneNumber", Post, "/phone_numbers").body([
			F::text("userId", "user_id").required(),
			F::text("phoneNumber", "phone_number").required(),
			F::flag("verified", "verified"),
			F::flag("primary", "primary"),
		]),
		Op::new(PhoneNumbers, "updatePhoneNumber", Patch, "/phone_numbers/{phoneNumberId}")
			.path_fields([PHONE_NUMBER_ID])
			.body([F::flag("verified", "verified"), F::flag("primary", "primary")]),
		Op::new(PhoneNumbers, "deletePhoneNumber", Delete, "/phone_numbers/{phoneNumberId}")
			.path_fields([PHONE_NUMBER_ID]),
	]
}

fn invitations() -> Vec<Op> {
	vec![
		Op::new(Invitations, "getInvitations", Get, "/invitations").query([
			F::number("limit", "limit").or_number(20),
			F::number("offset", "offset").or_number(0),
			F::text("status", "status"),
		]),
		Op::new(Invitations, "createInvitation", Post, "/invitations").body([
			F::text("email_address", "email_address").required(),
			F::flag("notify", "notify").or_flag(true),
			F::flag("ignore_existing", "ignore_existing").or_flag(false),
			F::json("private_metadata", "private_metadata"),
			F::json("public_metadata", "public_metadata"),
			F::text("redirect_url", "redirect_url"),
		]),
		Op::new(Invitations, "revokeInvitation", Post, "/invitations/{invitation_id}/revoke")
			.path_fields([F::path("invitation_id")]),
	]
}

fn allowlist_identifiers() -> Vec<Op> {
	vec![
		Op::new(AllowlistIdentifiers, "getAllowlistIdentifiers", Get, "/allowlist_identifiers"),
		Op::new(AllowlistIdentifiers, "createAllowlistIdentifier", Post, "/allowlist_identifiers")
			.body([
				F::text("identifier", "identifier").required(),
				F::flag("notify", "notify").or_flag(true),
			]),
		Op::new(
			AllowlistIdentifiers,
			"deleteAllowlistIdentifier",
			Delete,
			"/allowlist_identifiers/{identifierId}",
		)
		.path_fields([F::path("identifierId")]),
	]
}

fn blocklist_identifiers() -> Vec<Op> {
	vec![
		Op::new(BlocklistIdentifiers, "getBlocklistIdentifiers", Get, "/blocklist_identifiers"),
		Op::new(BlocklistIdentifiers, "createBlocklistIdentifier", Post, "/blocklist_identifiers")
			.body([F::text("identifier", "identifier").required()]),
		Op::new(
			BlocklistIdentifiers,
			"deleteBlocklistIdentifier",
			Delete,
			"/blocklist_identifiers/{identifierId}",
		)
		.path_fields([F::path("identifierId")]),
	]
}

fn jwt_templates() -> Vec<Op> {
	const TEMPLATE_ID: F = F::path("templateId");
	const SIGNING_KEY: F = F::text("signingKey", "signing_key").only_if("customSigningKey");

	vec![
		Op::new(JwtTemplates, "getJwtTemplates", Get, "/jwt_templates"),
		Op::new(JwtTemplates, "getJwtTemplate", Get, "/jwt_templates/{templateId}")
			.path_fields([TEMPLATE_ID]),
		Op::new(JwtTemplates, "createJwtTemplate", Post, "/jwt_templates").body([
			F::text("name", "name").required(),
			F::json("claims", "claims").always(),
			F::number("lifetime", "lifetime").or_number(3600),
			F::number("allowedClockSkew", "allowed_clock_skew").or_number(5),
			F::flag("customSigningKey", "custom_signing_key").or_flag(false),
			F::text("signingAlgorithm", "signing_algorithm").or_text("RS256"),
			SIGNING_KEY,
		]),
		Op::new(JwtTemplates, "updateJwtTemplate", Patch, "/jwt_templates/{templateId}")
			.path_fields([TEMPLATE_ID])
			.body([
				F::text("name", "name"),
				F::json("claims", "claims"),
				F::number("lifetime", "lifetime"),
				F::number("allowedClockSkew", "allowed_clock_skew"),
				F::flag("customSigningKey", "custom_signing_key"),
				F::text("signingAlgorithm", "signing_algorithm"),
				SIGNING_KEY,
			]),
		Op::new(JwtTemplates, "deleteJwtTemplate", Delete, "/jwt_templates/{templateId}")
			.path_fields([TEMPLATE_ID]),
	]
}
