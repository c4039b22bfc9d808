//! nginx server block for a Laravel-style project.

use crate::domain::site::SiteConfig;

/// Render the virtual-host configuration for `site`.
#[must_use]
pub fn render(site: &SiteConfig) -> String {
    let domain = &site.domain;
    let root = site.document_root.display();
    let socket = &site.php_fpm_socket;
    format!(
        r"server {{
    listen 80;
    server_name {domain};
    root {root};

    index index.php index.html index.htm;

    location / {{
        try_files $uri $uri/ /index.php?$query_string;
    }}

    location ~ \.php$ {{
        include snippets/fastcgi-php.conf;
        fastcgi_pass unix:{socket};
        fastcgi_param SCRIPT_FILENAME $document_root$fastcgi_script_name;
        include fastcgi_params;
    }}

    location ~ /\.ht {{
        deny all;
    }}
}}"
    )
}
