#![allow(dead_code)]

pub const POST_HELLO: &str = r##"title: Hello
slug: hello
summary: A tiny greeting

Body **bold** text.
"##;

pub const POST_BODY_MD: &str = r##"# Release notes

We shipped **v2** with a *lot* of fixes, see [the changelog](https://x/changelog).

Run `outpost telegram` after merging:

```sh
$ outpost telegram && echo ok
```

![dashboard](https://x/dash.png)
"##;
