//! The fixed configuration catalog for the home server deployment.
//!
//! One registration block per managed component: core settings, then
//! PiHole, Plex, Nextcloud, MariaDB, Redis, and Nginx Proxy Manager.
//! Grouping is by path prefix only; the registry itself is flat.

use homestack_types::prelude::*;

use crate::schema::{SchemaRegistry, ValueDef};

/// Register every catalog value.
pub fn register_all(registry: &mut SchemaRegistry) -> HsResult<()> {
	register_core(registry)?;
	register_pihole(registry)?;
	register_plex(registry)?;
	register_nextcloud(registry)?;
	register_mariadb(registry)?;
	register_redis(registry)?;
	register_nginx_proxy_manager(registry)?;
	Ok(())
}

fn register_core(registry: &mut SchemaRegistry) -> HsResult<()> {
	registry.register(
		ValueDef::builder("core/timezone")
			.default("Europe/Berlin")
			.section("General")
			.display_name("Timezone")
			.description("System timezone for all containers (TZ database name)")
			.placeholder("Europe/Berlin")
			.build()?,
	)?;
	registry.register(
		ValueDef::builder("core/domain")
			.default("")
			.section("General")
			.display_name("Base Domain")
			.description("Base domain for service URLs (e.g., home.example.com)")
			.placeholder("home.example.com")
			.required()
			.build()?,
	)?;
	registry.register(
		ValueDef::builder("core/data-root")
			.default("/srv/homeserver")
			.section("Storage")
			.display_name("Data Root Path")
			.description("Base directory for bind-mounted service data on the host")
			.placeholder("/srv/homeserver")
			.build()?,
	)?;
	registry.register(
		ValueDef::builder("core/compose-project-name")
			.default("home-server")
			.section("General")
			.display_name("Compose Project Name")
			.description("Docker Compose project name (used for container/network naming)")
			.build()?,
	)?;
	Ok(())
}

fn register_pihole(registry: &mut SchemaRegistry) -> HsResult<()> {
	registry.register(
		ValueDef::builder("pihole/image-tag")
			.default("latest")
			.section("Image")
			.display_name("PiHole Image Tag")
			.description("Docker image tag for pihole/pihole")
			.build()?,
	)?;
	registry.register(
		ValueDef::builder("pihole/dns-port")
			.default(53)
			.section("Network")
			.display_name("DNS Port")
			.description("Host port for DNS (UDP/TCP)")
			.build()?,
	)?;
	registry.register(
		ValueDef::builder("pihole/web-port")
			.default(8053)
			.section("Network")
			.display_name("Web Admin Port")
			.description("Host port for PiHole web admin interface")
			.build()?,
	)?;
	registry.register(
		ValueDef::builder("pihole/admin-password")
			.default("")
			.section("Security")
			.display_name("Admin Password")
			.description("Password for the PiHole web admin interface")
			.password()
			.required()
			.build()?,
	)?;
	registry.register(
		ValueDef::builder("pihole/upstream-dns")
			.default("1.1.1.1;8.8.8.8")
			.section("DNS")
			.display_name("Upstream DNS Servers")
			.description("Semicolon-separated upstream DNS servers")
			.placeholder("1.1.1.1;8.8.8.8")
			.build()?,
	)?;
	registry.register(
		ValueDef::builder("pihole/dnssec")
			.default(true)
			.section("DNS")
			.display_name("Enable DNSSEC")
			.description("Enable DNSSEC validation for DNS queries")
			.build()?,
	)?;
	registry.register(
		ValueDef::builder("pihole/custom-blocklists")
			.default("")
			.section("DNS")
			.display_name("Custom Blocklists")
			.description("Comma-separated URLs for additional blocklists")
			.placeholder("https://example.com/blocklist.txt")
			.build()?,
	)?;
	Ok(())
}

fn register_plex(registry: &mut SchemaRegistry) -> HsResult<()> {
	registry.register(
		ValueDef::builder("plex/image-tag")
			.default("latest")
			.section("Image")
			.display_name("Plex Image Tag")
			.description("Docker image tag for linuxserver/plex")
			.build()?,
	)?;
	registry.register(
		ValueDef::builder("plex/web-port")
			.default(32400)
			.section("Network")
			.display_name("Web UI Port")
			.description("Host port for Plex web interface")
			.build()?,
	)?;
	registry.register(
		ValueDef::builder("plex/claim-token")
			.default("")
			.section("Account")
			.display_name("Claim Token")
			.description("Plex claim token from https://plex.tv/claim (valid 4 minutes)")
			.password()
			.placeholder("claim-xxxxxxxxxxxxxxxxxxxx")
			.build()?,
	)?;
	registry.register(
		ValueDef::builder("plex/puid")
			.default(1000)
			.section("Permissions")
			.display_name("PUID")
			.description("User ID for file ownership inside the container")
			.build()?,
	)?;
	registry.register(
		ValueDef::builder("plex/pgid")
			.default(1000)
			.section("Permissions")
			.display_name("PGID")
			.description("Group ID for file ownership inside the container")
			.build()?,
	)?;
	registry.register(
		ValueDef::builder("plex/media-movies")
			.default("/mnt/media/movies")
			.section("Media Libraries")
			.display_name("Movies Path")
			.description("Host path to movies library")
			.placeholder("/mnt/media/movies")
			.build()?,
	)?;
	registry.register(
		ValueDef::builder("plex/media-tv")
			.default("/mnt/media/tv")
			.section("Media Libraries")
			.display_name("TV Shows Path")
			.description("Host path to TV shows library")
			.placeholder("/mnt/media/tv")
			.build()?,
	)?;
	registry.register(
		ValueDef::builder("plex/media-music")
			.default("/mnt/media/music")
			.section("Media Libraries")
			.display_name("Music Path")
			.description("Host path to music library")
			.placeholder("/mnt/media/music")
			.build()?,
	)?;
	registry.register(
		ValueDef::builder("plex/hardware-transcoding")
			.default(false)
			.section("Transcoding")
			.display_name("Hardware Transcoding")
			.description("Enable hardware transcoding via /dev/dri (Intel Quick Sync / AMD VCE)")
			.build()?,
	)?;
	Ok(())
}

fn register_nextcloud(registry: &mut SchemaRegistry) -> HsResult<()> {
	registry.register(
		ValueDef::builder("nextcloud/image-tag")
			.default("latest")
			.section("Image")
			.display_name("Nextcloud Image Tag")
			.description("Docker image tag for nextcloud")
			.build()?,
	)?;
	registry.register(
		ValueDef::builder("nextcloud/web-port")
			.default(8080)
			.section("Network")
			.display_name("Web Port")
			.description("Host port for Nextcloud web interface")
			.build()?,
	)?;
	registry.register(
		ValueDef::builder("nextcloud/admin-user")
			.default("admin")
			.section("Admin Account")
			.display_name("Admin Username")
			.description("Nextcloud admin username (set during first run only)")
			.build()?,
	)?;
	registry.register(
		ValueDef::builder("nextcloud/admin-password")
			.default("")
			.section("Admin Account")
			.display_name("Admin Password")
			.description("Nextcloud admin password (set during first run only)")
			.password()
			.required()
			.build()?,
	)?;
	registry.register(
		ValueDef::builder("nextcloud/trusted-domains")
			.default("localhost")
			.section("Security")
			.display_name("Trusted Domains")
			.description("Space-separated list of trusted domains for Nextcloud")
			.placeholder("localhost cloud.home.example.com")
			.build()?,
	)?;
	registry.register(
		ValueDef::builder("nextcloud/max-upload-size")
			.default("16G")
			.section("Uploads")
			.display_name("Max Upload Size")
			.description("Maximum file upload size (e.g., 512M, 1G, 16G)")
			.build()?,
	)?;
	registry.register(
		ValueDef::builder("nextcloud/redis-file-locking")
			.default(true)
			.section("Performance")
			.display_name("Redis File Locking")
			.description(
				"Use Redis for transactional file locking (recommended when Redis is available)",
			)
			.build()?,
	)?;
	registry.register(
		ValueDef::builder("nextcloud/smtp-host")
			.default("")
			.section("Email (SMTP)")
			.display_name("SMTP Host")
			.description("SMTP server hostname for sending emails")
			.placeholder("smtp.example.com")
			.build()?,
	)?;
	registry.register(
		ValueDef::builder("nextcloud/smtp-port")
			.default(587)
			.section("Email (SMTP)")
			.display_name("SMTP Port")
			.description("SMTP server port")
			.build()?,
	)?;
	registry.register(
		ValueDef::builder("nextcloud/smtp-user")
			.default("")
			.section("Email (SMTP)")
			.display_name("SMTP Username")
			.description("SMTP authentication username")
			.build()?,
	)?;
	registry.register(
		ValueDef::builder("nextcloud/smtp-password")
			.default("")
			.section("Email (SMTP)")
			.display_name("SMTP Password")
			.description("SMTP authentication password")
			.password()
			.build()?,
	)?;
	Ok(())
}

fn register_mariadb(registry: &mut SchemaRegistry) -> HsResult<()> {
	registry.register(
		ValueDef::builder("mariadb/image-tag")
			.default("11")
			.section("Image")
			.display_name("MariaDB Image Tag")
			.description("Docker image tag for mariadb")
			.build()?,
	)?;
	registry.register(
		ValueDef::builder("mariadb/root-password")
			.default("")
			.section("Security")
			.display_name("Root Password")
			.description("MariaDB root password (set during first run only)")
			.password()
			.required()
			.build()?,
	)?;
	registry.register(
		ValueDef::builder("mariadb/nextcloud-db")
			.default("nextcloud")
			.section("Nextcloud Database")
			.display_name("Database Name")
			.description("Database name for Nextcloud")
			.build()?,
	)?;
	registry.register(
		ValueDef::builder("mariadb/nextcloud-user")
			.default("nextcloud")
			.section("Nextcloud Database")
			.display_name("Database User")
			.description("Database user for Nextcloud")
			.build()?,
	)?;
	registry.register(
		ValueDef::builder("mariadb/nextcloud-password")
			.default("")
			.section("Nextcloud Database")
			.display_name("Database Password")
			.description("Database password for the Nextcloud user")
			.password()
			.required()
			.build()?,
	)?;
	registry.register(
		ValueDef::builder("mariadb/enable-binlog")
			.default(false)
			.section("Replication")
			.display_name("Enable Binary Logging")
			.description(
				"Enable binary logging for replication. Disabled by default to save disk space on home servers.",
			)
			.build()?,
	)?;
	registry.register(
		ValueDef::builder("mariadb/innodb-buffer-pool-size")
			.default("256M")
			.section("Tuning")
			.display_name("InnoDB Buffer Pool Size")
			.description("InnoDB buffer pool size (e.g., 256M, 1G)")
			.placeholder("256M")
			.build()?,
	)?;
	Ok(())
}

fn register_redis(registry: &mut SchemaRegistry) -> HsResult<()> {
	registry.register(
		ValueDef::builder("redis/image-tag")
			.default("8-alpine")
			.section("Image")
			.display_name("Redis Image Tag")
			.description("Docker image tag for redis")
			.build()?,
	)?;
	registry.register(
		ValueDef::builder("redis/maxmemory")
			.default("128mb")
			.section("Memory")
			.display_name("Max Memory")
			.description("Maximum memory Redis can use (e.g., 128mb, 256mb)")
			.placeholder("128mb")
			.build()?,
	)?;
	registry.register(
		ValueDef::builder("redis/maxmemory-policy")
			.default("allkeys-lru")
			.section("Memory")
			.display_name("Eviction Policy")
			.description("How Redis evicts keys when maxmemory is reached")
			.select_from(["allkeys-lru", "volatile-lru", "allkeys-lfu", "volatile-lfu", "noeviction"])
			.build()?,
	)?;
	Ok(())
}

fn register_nginx_proxy_manager(registry: &mut SchemaRegistry) -> HsResult<()> {
	registry.register(
		ValueDef::builder("nginx-proxy-manager/image-tag")
			.default("latest")
			.section("Image")
			.display_name("NPM Image Tag")
			.description("Docker image tag for jc21/nginx-proxy-manager")
			.build()?,
	)?;
	registry.register(
		ValueDef::builder("nginx-proxy-manager/http-port")
			.default(80)
			.section("Ports")
			.display_name("HTTP Port")
			.description("Host port for HTTP traffic")
			.build()?,
	)?;
	registry.register(
		ValueDef::builder("nginx-proxy-manager/https-port")
			.default(443)
			.section("Ports")
			.display_name("HTTPS Port")
			.description("Host port for HTTPS traffic")
			.build()?,
	)?;
	registry.register(
		ValueDef::builder("nginx-proxy-manager/admin-port")
			.default(81)
			.section("Ports")
			.display_name("Admin UI Port")
			.description("Host port for NPM admin web interface")
			.build()?,
	)?;
	registry.register(
		ValueDef::builder("nginx-proxy-manager/letsencrypt-email")
			.default("")
			.section("SSL")
			.display_name("Let's Encrypt Email")
			.description("Email for Let's Encrypt certificate notifications")
			.placeholder("admin@example.com")
			.build()?,
	)?;
	Ok(())
}

// vim: ts=4
